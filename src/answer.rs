// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Short answers from extracted-answer results.
//!
//! A single highlight in an answer text is taken to be the canonical short
//! answer ("Tokyo", "42 days"). Zero highlights or several of them mean there
//! is no short form, and we return an empty string rather than guess. Multiple
//! highlights are never concatenated and nothing is trimmed: if the offsets
//! include a trailing space, so does the answer.

use crate::types::{OffsetUnit, TextWithHighlights};

/// The lone highlighted substring of `answer`, or `""`.
pub fn answer_noun(answer: Option<&TextWithHighlights>) -> String {
    answer_noun_with(answer, OffsetUnit::Char)
}

/// `answer_noun` under an explicit offset convention.
pub fn answer_noun_with(answer: Option<&TextWithHighlights>, unit: OffsetUnit) -> String {
    let Some(answer) = answer else {
        return String::new();
    };
    let [highlight] = answer.highlights.as_slice() else {
        return String::new();
    };
    highlight
        .byte_range(&answer.text, unit)
        .map(|range| answer.text[range].to_string())
        .unwrap_or_default()
}
