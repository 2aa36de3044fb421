// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prompt context built from search results.
//!
//! When the conversation also asks a language model to answer from the
//! retrieved documents, the documents are flattened into one context string.
//! Two layouts exist, depending on what the model was tuned on:
//!
//! - `Plain`: indented title, then the excerpt labelled `抜粋:`
//! - `Numbered`: `[i]` markers the model can cite back

use serde::{Deserialize, Serialize};

use crate::types::ResultItem;

/// How documents are laid out in the context string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextStyle {
    #[default]
    Plain,
    Numbered,
}

/// The two fields of a result a model sees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDocument {
    pub title: String,
    pub excerpt: String,
}

impl ContextDocument {
    pub fn new(title: impl Into<String>, excerpt: impl Into<String>) -> Self {
        ContextDocument {
            title: title.into(),
            excerpt: excerpt.into(),
        }
    }
}

impl From<&ResultItem> for ContextDocument {
    fn from(item: &ResultItem) -> Self {
        let text = |value: &Option<crate::types::TextWithHighlights>| {
            value.as_ref().map(|v| v.text.clone()).unwrap_or_default()
        };
        ContextDocument {
            title: text(&item.title),
            excerpt: text(&item.excerpt),
        }
    }
}

/// Flatten `documents` into a context string.
pub fn build_context(documents: &[ContextDocument], style: ContextStyle) -> String {
    let mut context = String::new();
    for (idx, doc) in documents.iter().enumerate() {
        match style {
            ContextStyle::Plain => {
                context.push_str(&format!("\t{}\n\t\t抜粋: {}\n", doc.title, doc.excerpt));
            }
            ContextStyle::Numbered => {
                context.push_str(&format!("[{}]{}\n{}\n", idx, doc.title, doc.excerpt));
            }
        }
    }
    context
}
