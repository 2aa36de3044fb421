// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What happens when a user touches a result.
//!
//! Three gestures, each with a fixed recipe:
//!
//! | Action               | Feedback        | Pin board        | Notice            |
//! |----------------------|-----------------|------------------|-------------------|
//! | open the link        | `Click`         | -                | -                 |
//! | click the excerpt    | -               | append excerpt   | `pinned`          |
//! | thumbs up / down     | rating          | -                | `feedback_thanks` |
//!
//! The notice for a rating goes out *before* the feedback is queued, so the
//! user sees the thanks even if the submission later fails.
//!
//! The pin board and notifier are owned by the presentation layer; we only
//! receive them for the duration of a call.

use serde::Serialize;

use crate::config::Config;
use crate::feedback::{FeedbackEmitter, Relevance};
use crate::types::ResultItem;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    Success,
}

/// A short-lived confirmation for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub status: NoticeStatus,
    pub duration_ms: u64,
    pub closable: bool,
}

impl Notice {
    pub fn success(title: impl Into<String>, duration_ms: u64) -> Self {
        Notice {
            title: title.into(),
            description: String::new(),
            status: NoticeStatus::Success,
            duration_ms,
            closable: true,
        }
    }
}

/// Surfaces notices to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Ordered collection of pinned snippets.
pub trait PinBoard {
    fn append(&mut self, text: String);
}

impl PinBoard for Vec<String> {
    fn append(&mut self, text: String) {
        self.push(text);
    }
}

/// A user gesture on one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Open,
    Pin,
    ThumbsUp,
    ThumbsDown,
}

/// Text a pin appends for `item`: its excerpt, or `load_error` without one.
pub fn pin_text<'a>(item: &'a ResultItem, load_error: &'a str) -> &'a str {
    item.excerpt
        .as_ref()
        .map(|excerpt| excerpt.text.as_str())
        .unwrap_or(load_error)
}

/// Binds the collaborators for one rendered response.
pub struct Interactions<'a, N: Notifier + ?Sized> {
    emitter: &'a FeedbackEmitter,
    notifier: &'a N,
    config: &'a Config,
    query_id: &'a str,
}

impl<'a, N: Notifier + ?Sized> Interactions<'a, N> {
    pub fn new(
        emitter: &'a FeedbackEmitter,
        notifier: &'a N,
        config: &'a Config,
        query_id: &'a str,
    ) -> Self {
        Interactions {
            emitter,
            notifier,
            config,
            query_id,
        }
    }

    pub fn query_id(&self) -> &str {
        self.query_id
    }

    /// The user followed `item`'s link.
    pub fn open(&self, item: &ResultItem) {
        self.emitter
            .emit(Relevance::Click, item.id.as_deref(), self.query_id);
    }

    /// The user pinned `item`'s excerpt.
    pub fn pin<B: PinBoard + ?Sized>(&self, item: &ResultItem, board: &mut B) {
        board.append(pin_text(item, &self.config.messages.load_error).to_string());
        self.notice(&self.config.messages.pinned);
    }

    /// The user rated `item`. `Relevance::Click` is treated like `open`.
    pub fn rate(&self, item: &ResultItem, relevance: Relevance) {
        if relevance != Relevance::Click {
            self.notice(&self.config.messages.feedback_thanks);
        }
        self.emitter.emit(relevance, item.id.as_deref(), self.query_id);
    }

    /// Route one gesture.
    pub fn dispatch<B: PinBoard + ?Sized>(&self, action: Action, item: &ResultItem, board: &mut B) {
        match action {
            Action::Open => self.open(item),
            Action::Pin => self.pin(item, board),
            Action::ThumbsUp => self.rate(item, Relevance::Relevant),
            Action::ThumbsDown => self.rate(item, Relevance::NotRelevant),
        }
    }

    fn notice(&self, title: &str) {
        self.notifier
            .notify(Notice::success(title, self.config.notice_duration_ms));
    }
}
