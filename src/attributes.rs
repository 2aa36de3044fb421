// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Looking up highlighted text in a flat attribute list.
//!
//! FAQ and answer results don't put their question and answer in the title
//! or excerpt; they bury them in `AdditionalAttributes` under well-known keys.
//! Lookup is a linear scan and the first matching key wins. Duplicate keys are
//! legal, just shadowed.

use std::borrow::Cow;

use crate::types::{AttributeRecord, TextWithHighlights};

/// Key holding an FAQ's question.
pub const QUESTION_KEY: &str = "QuestionText";

/// Key holding an FAQ's or extracted answer's answer text.
pub const ANSWER_KEY: &str = "AnswerText";

/// Marker text for a key that isn't present.
pub const NOT_FOUND_TEXT: &str = "該当なし";

/// Outcome of scanning an attribute list for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeLookup<'a> {
    /// First record with the key carries highlighted text.
    Text(&'a TextWithHighlights),
    /// First record with the key carries some other value type.
    Untyped,
    /// No record has the key.
    Missing,
}

/// Scan `attributes` for the first record keyed `key`.
pub fn lookup<'a>(attributes: &'a [AttributeRecord], key: &str) -> AttributeLookup<'a> {
    match attributes.iter().find(|record| record.key == key) {
        Some(record) => match record.value.as_ref().and_then(|v| v.as_text()) {
            Some(text) => AttributeLookup::Text(text),
            None => AttributeLookup::Untyped,
        },
        None => AttributeLookup::Missing,
    }
}

/// Sentinel returned for a missing key: `marker` with no highlights.
pub fn not_found(marker: &str) -> TextWithHighlights {
    TextWithHighlights::plain(marker)
}

/// Highlighted text stored under `key`.
///
/// A missing key yields the `NOT_FOUND_TEXT` sentinel; a key holding some
/// other value type yields `None`, leaving the fallback to the caller.
pub fn text_attribute<'a>(
    attributes: &'a [AttributeRecord],
    key: &str,
) -> Option<Cow<'a, TextWithHighlights>> {
    text_attribute_or(attributes, key, NOT_FOUND_TEXT)
}

/// `text_attribute` with a caller-chosen not-found marker.
pub fn text_attribute_or<'a>(
    attributes: &'a [AttributeRecord],
    key: &str,
    marker: &str,
) -> Option<Cow<'a, TextWithHighlights>> {
    match lookup(attributes, key) {
        AttributeLookup::Text(text) => Some(Cow::Borrowed(text)),
        AttributeLookup::Missing => Some(Cow::Owned(not_found(marker))),
        AttributeLookup::Untyped => None,
    }
}
