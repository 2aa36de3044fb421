//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and recording collaborators so every test
//! builds results the same way.

#![doc(hidden)]

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::attributes::{ANSWER_KEY, QUESTION_KEY};
use crate::error::FeedbackError;
use crate::feedback::{FeedbackEvent, FeedbackSink};
use crate::interaction::{Notice, Notifier};
use crate::types::{AttributeRecord, HighlightRange, ResultItem, TextWithHighlights};

/// Create a result with a title, excerpt and URI derived from `id`.
pub fn make_item(id: &str, tag: &str) -> ResultItem {
    ResultItem {
        id: Some(id.to_string()),
        tag: Some(tag.to_string()),
        title: Some(TextWithHighlights::plain(format!("Title {}", id))),
        excerpt: Some(TextWithHighlights::plain(format!("Excerpt {}", id))),
        uri: Some(format!("https://example.com/{}", id)),
        attributes: Vec::new(),
    }
}

/// Create an FAQ result whose answer carries `answer_highlights`.
pub fn make_faq_item(
    id: &str,
    question: &str,
    answer: &str,
    answer_highlights: Vec<HighlightRange>,
) -> ResultItem {
    let mut item = make_item(id, "QUESTION_ANSWER");
    item.attributes = vec![
        AttributeRecord::text(QUESTION_KEY, TextWithHighlights::plain(question)),
        AttributeRecord::text(ANSWER_KEY, TextWithHighlights::new(answer, answer_highlights)),
    ];
    item
}

/// Create an extracted-answer result.
pub fn make_excerpt_item(id: &str, answer: &str, highlights: Vec<HighlightRange>) -> ResultItem {
    let mut item = make_item(id, "ANSWER");
    item.attributes = vec![AttributeRecord::text(
        ANSWER_KEY,
        TextWithHighlights::new(answer, highlights),
    )];
    item
}

/// Feedback sink that remembers everything it was sent.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<FeedbackEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<FeedbackEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl FeedbackSink for RecordingSink {
    async fn submit(&self, event: FeedbackEvent) -> Result<(), FeedbackError> {
        self.events.lock().push(event);
        Ok(())
    }
}

/// Feedback sink that rejects everything.
#[derive(Debug, Default)]
pub struct FailingSink;

#[async_trait]
impl FeedbackSink for FailingSink {
    async fn submit(&self, _event: FeedbackEvent) -> Result<(), FeedbackError> {
        Err(FeedbackError::Transport("unavailable".to_string()))
    }
}

/// Notifier that remembers every notice.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
