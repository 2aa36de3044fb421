// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning highlight offsets into renderable segments.
//!
//! The upstream hands us ranges that may be unsorted, overlapping, reversed,
//! or pointing past the end of the text. None of that is an error. We clamp,
//! drop, sort and merge until what's left is a set of disjoint byte intervals,
//! then walk the text once.
//!
//! **Invariant**: concatenating the segments of `T` reproduces `T.text`
//! exactly, in order, with no gaps and no overlaps.
//!
//! **Verified by**:
//! - `prop_segments_reconstruct_text` (tests/property.rs)
//! - `prop_disjoint_ranges_survive_intact` (tests/property.rs)

use std::ops::Range;

use serde::Serialize;

use crate::types::{HighlightRange, OffsetUnit, TextWithHighlights};

/// A contiguous piece of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Owned form of `Segment`, for view models that outlive the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub highlighted: bool,
}

impl From<Segment<'_>> for Span {
    fn from(segment: Segment<'_>) -> Self {
        Span {
            text: segment.text.to_string(),
            highlighted: segment.highlighted,
        }
    }
}

/// Clamp, filter, sort and merge `ranges` into disjoint byte intervals.
///
/// Overlapping *and* touching ranges merge, so `[0,3)` and `[3,5)` come back
/// as a single `[0,5)`. Empty and reversed ranges are dropped.
pub fn merge_ranges(text: &str, ranges: &[HighlightRange], unit: OffsetUnit) -> Vec<Range<usize>> {
    let mut resolved: Vec<Range<usize>> = ranges
        .iter()
        .filter_map(|range| {
            let bytes = range.byte_range(text, unit);
            if bytes.is_none() {
                tracing::trace!(begin = range.begin, end = ?range.end, "skipping empty highlight");
            }
            bytes
        })
        .collect();

    resolved.sort_unstable_by_key(|r| (r.start, r.end));

    resolved.into_iter().fold(Vec::new(), |mut merged: Vec<Range<usize>>, next| {
        match merged.last_mut() {
            Some(last) if next.start <= last.end => last.end = last.end.max(next.end),
            _ => merged.push(next),
        }
        merged
    })
}

/// Lazily yields the segments of one highlighted text.
///
/// Cloning restarts from wherever the clone was taken; `resolve` again to
/// restart from the top.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    intervals: Vec<Range<usize>>,
    next_interval: usize,
    cursor: usize,
}

impl<'a> Segments<'a> {
    fn new(text: &'a str, intervals: Vec<Range<usize>>) -> Self {
        Segments {
            text,
            intervals,
            next_interval: 0,
            cursor: 0,
        }
    }

    /// The merged highlight intervals, as byte ranges.
    pub fn intervals(&self) -> &[Range<usize>] {
        &self.intervals
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.text.len() {
            return None;
        }
        let (range, highlighted) = match self.intervals.get(self.next_interval) {
            Some(interval) if interval.start > self.cursor => (self.cursor..interval.start, false),
            Some(interval) => {
                self.next_interval += 1;
                (interval.clone(), true)
            }
            None => (self.cursor..self.text.len(), false),
        };
        self.cursor = range.end;
        Some(Segment {
            text: &self.text[range],
            highlighted,
        })
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Split `value` into plain and highlighted segments.
///
/// # Example
///
/// ```
/// use glint::{resolve, HighlightRange, OffsetUnit, TextWithHighlights};
///
/// let value = TextWithHighlights::new(
///     "abcdef",
///     vec![HighlightRange::new(0, 3), HighlightRange::new(2, 5)],
/// );
/// let parts: Vec<_> = resolve(&value, OffsetUnit::Char)
///     .map(|s| (s.text, s.highlighted))
///     .collect();
/// assert_eq!(parts, vec![("abcde", true), ("f", false)]);
/// ```
pub fn resolve(value: &TextWithHighlights, unit: OffsetUnit) -> Segments<'_> {
    let intervals = merge_ranges(&value.text, &value.highlights, unit);
    Segments::new(&value.text, intervals)
}

/// `resolve`, collected into owned spans.
pub fn spans(value: &TextWithHighlights, unit: OffsetUnit) -> Vec<Span> {
    resolve(value, unit).map(Span::from).collect()
}

impl TextWithHighlights {
    /// Segments under the default (character) offset convention.
    pub fn segments(&self) -> Segments<'_> {
        resolve(self, OffsetUnit::Char)
    }
}
