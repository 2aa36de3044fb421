// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! View model for a classified response.
//!
//! Each bucket becomes a panel with its own notion of what a card's heading
//! and body are:
//!
//! | Panel    | Layout | Heading                        | Body               | Ratings |
//! |----------|--------|--------------------------------|--------------------|---------|
//! | Featured | tabs   | title                          | excerpt            | no      |
//! | FAQ      | tabs   | `QuestionText` attribute       | `AnswerText`       | yes     |
//! | Excerpt  | tabs   | short answer of `AnswerText`   | `AnswerText`       | yes     |
//! | Document | list   | title                          | excerpt            | yes     |
//!
//! Empty tabbed panels are not drawn. The document section always is: with no
//! results it shows its heading and the not-found placeholder.
//!
//! Whatever the panel, pinning a card pins the item's *excerpt*.

use serde::Serialize;

use crate::answer::answer_noun_with;
use crate::attributes::{lookup, not_found, AttributeLookup};
use crate::classify::{Bucket, Classification};
use crate::config::Config;
use crate::highlight::{spans, Span};
use crate::interaction::pin_text;
use crate::types::{ResultItem, TextWithHighlights};

/// Link target for documents without a URI.
pub const NO_LINK: &str = "#";

/// A card's heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Heading {
    /// Highlighted text, drawn with emphasised segments.
    Highlighted(Vec<Span>),
    /// A short answer, drawn bold as a whole.
    Strong(String),
}

impl Heading {
    /// Visible heading text, highlights flattened.
    pub fn text(&self) -> String {
        match self {
            Heading::Highlighted(spans) => spans.iter().map(|s| s.text.as_str()).collect(),
            Heading::Strong(text) => text.clone(),
        }
    }
}

/// One rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub result_id: String,
    /// Tab label, for tabbed panels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub heading: Heading,
    pub body: Vec<Span>,
    /// What a pin on this card appends.
    pub pin_text: String,
    /// Whether thumbs up/down are offered.
    pub ratings: bool,
}

/// A tabbed panel: featured, FAQ or excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub bucket: Bucket,
    pub cards: Vec<Card>,
}

/// The document list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSection {
    pub heading: String,
    pub cards: Vec<Card>,
    /// Shown instead of cards when there are none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Everything the UI draws for one response, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rendered {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<Panel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Panel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<Panel>,
    pub documents: DocumentSection,
}

impl Rendered {
    /// Tabbed panels that are drawn, in order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        [&self.featured, &self.faq, &self.excerpt]
            .into_iter()
            .filter_map(Option::as_ref)
    }
}

/// Build the view model for `classification`.
pub fn render(classification: &Classification<'_>, config: &Config) -> Rendered {
    let renderer = Renderer { config };
    let panel = |bucket: Bucket| {
        classification.is_visible(bucket).then(|| Panel {
            bucket,
            cards: renderer.cards(bucket, classification.bucket(bucket)),
        })
    };

    let cards = if classification.is_visible(Bucket::Document) {
        renderer.cards(Bucket::Document, &classification.document)
    } else {
        Vec::new()
    };
    let placeholder = cards
        .is_empty()
        .then(|| config.messages.not_found.clone());

    Rendered {
        query_id: classification.query_id.map(str::to_string),
        featured: panel(Bucket::Featured),
        faq: panel(Bucket::Faq),
        excerpt: panel(Bucket::Excerpt),
        documents: DocumentSection {
            heading: config.messages.documents_heading.clone(),
            cards,
            placeholder,
        },
    }
}

struct Renderer<'c> {
    config: &'c Config,
}

impl Renderer<'_> {
    fn cards(&self, bucket: Bucket, items: &[&ResultItem]) -> Vec<Card> {
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| self.card(bucket, idx, item))
            .collect()
    }

    fn card(&self, bucket: Bucket, idx: usize, item: &ResultItem) -> Card {
        let messages = &self.config.messages;
        let keys = &self.config.attributes;
        let unit = self.config.offset_unit;

        let (tab_label, heading, body, link) = match bucket {
            Bucket::Featured => (
                Some(&messages.featured_tab),
                Heading::Highlighted(spans(&self.or_load_error(item.title.as_ref()), unit)),
                spans(&self.or_load_error(item.excerpt.as_ref()), unit),
                item.uri.clone(),
            ),
            Bucket::Faq => (
                Some(&messages.faq_tab),
                Heading::Highlighted(spans(&self.attribute(item, &keys.question), unit)),
                spans(&self.attribute(item, &keys.answer), unit),
                item.uri.clone(),
            ),
            Bucket::Excerpt => {
                let answer = self.attribute(item, &keys.answer);
                (
                    Some(&messages.excerpt_tab),
                    Heading::Strong(answer_noun_with(Some(&answer), unit)),
                    spans(&answer, unit),
                    item.uri.clone(),
                )
            }
            Bucket::Document => (
                None,
                Heading::Highlighted(spans(&self.or_load_error(item.title.as_ref()), unit)),
                spans(&self.or_load_error(item.excerpt.as_ref()), unit),
                Some(item.uri.clone().unwrap_or_else(|| NO_LINK.to_string())),
            ),
        };

        Card {
            result_id: item.id_or_empty().to_string(),
            tab: tab_label.map(|label| format!("{} {}", label, idx)),
            link,
            heading,
            body,
            pin_text: pin_text(item, &messages.load_error).to_string(),
            ratings: bucket != Bucket::Featured,
        }
    }

    /// Attribute text, the not-found sentinel, or the load-error fallback.
    fn attribute(&self, item: &ResultItem, key: &str) -> TextWithHighlights {
        match lookup(&item.attributes, key) {
            AttributeLookup::Text(text) => text.clone(),
            AttributeLookup::Missing => not_found(&self.config.messages.not_found),
            AttributeLookup::Untyped => self.load_error(),
        }
    }

    fn or_load_error(&self, value: Option<&TextWithHighlights>) -> TextWithHighlights {
        value.cloned().unwrap_or_else(|| self.load_error())
    }

    fn load_error(&self) -> TextWithHighlights {
        TextWithHighlights::plain(self.config.messages.load_error.as_str())
    }
}
