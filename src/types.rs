// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes a search response arrives in.
//!
//! Everything here mirrors the upstream search API's JSON, which is PascalCase
//! and loose: almost every field may be missing. We keep that looseness at the
//! edge (`Option`, `#[serde(default)]`) and tighten it in the typed views
//! (`ResultKind`, `Classification`) so the rest of the crate never has to ask
//! "is this here?" twice.
//!
//! | Type                 | Upstream name                  | Purpose                         |
//! |----------------------|--------------------------------|---------------------------------|
//! | `TextWithHighlights` | `TextWithHighlights`           | Text plus matched regions       |
//! | `HighlightRange`     | `Highlight`                    | One `[begin, end)` region       |
//! | `AttributeRecord`    | `AdditionalResultAttribute`    | Flattened key/value attribute   |
//! | `ResultItem`         | `QueryResultItem` / featured   | One hit, any category           |
//! | `QueryResponse`      | `QueryResult`                  | The whole response              |
//!
//! # Offsets
//!
//! Highlight offsets are **end-exclusive** and, by default, count Unicode scalar
//! values rather than bytes. `OffsetUnit` selects another convention when the
//! upstream counts UTF-16 code units or raw bytes.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// OFFSETS
// =============================================================================

/// What a highlight offset counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values (`str::chars`).
    #[default]
    Char,
    /// UTF-16 code units, the way JavaScript strings index.
    Utf16,
    /// Raw UTF-8 bytes.
    Byte,
}

impl OffsetUnit {
    /// How many units `c` occupies under this convention.
    #[inline]
    pub fn width(self, c: char) -> usize {
        match self {
            OffsetUnit::Char => 1,
            OffsetUnit::Utf16 => c.len_utf16(),
            OffsetUnit::Byte => c.len_utf8(),
        }
    }

    /// Length of `text` measured in this unit.
    pub fn len_of(self, text: &str) -> usize {
        match self {
            OffsetUnit::Byte => text.len(),
            OffsetUnit::Char => text.chars().count(),
            OffsetUnit::Utf16 => text.encode_utf16().count(),
        }
    }

    /// Convert an offset in this unit to a byte index into `text`.
    ///
    /// Offsets past the end clamp to `text.len()`. An offset that lands inside
    /// a character (half a surrogate pair, the middle of a multi-byte
    /// sequence) snaps down to that character's first byte, so the result is
    /// always a valid slice boundary.
    pub fn byte_index(self, text: &str, offset: usize) -> usize {
        if self == OffsetUnit::Byte && offset >= text.len() {
            return text.len();
        }
        let mut units = 0usize;
        for (byte, c) in text.char_indices() {
            if units + self.width(c) > offset {
                return byte;
            }
            units += self.width(c);
        }
        text.len()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OffsetUnit::Char => "char",
            OffsetUnit::Utf16 => "utf16",
            OffsetUnit::Byte => "byte",
        }
    }
}

// =============================================================================
// LENIENT FIELDS
// =============================================================================

/// Deserializers for fields the upstream fills inconsistently.
///
/// An explicit `null` reads as the default, and offsets saturate into
/// `usize`: negative values become 0, oversized ones `usize::MAX`, both to be
/// clamped against the text later.
mod lenient {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawOffset {
        Unsigned(u64),
        Signed(i64),
    }

    impl RawOffset {
        fn saturate(self) -> usize {
            match self {
                RawOffset::Unsigned(n) => usize::try_from(n).unwrap_or(usize::MAX),
                RawOffset::Signed(n) => usize::try_from(n.max(0)).unwrap_or(usize::MAX),
            }
        }
    }

    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub fn offset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
        Ok(Option::<RawOffset>::deserialize(deserializer)?
            .map(RawOffset::saturate)
            .unwrap_or(0))
    }

    pub fn optional_offset<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<usize>, D::Error> {
        Ok(Option::<RawOffset>::deserialize(deserializer)?.map(RawOffset::saturate))
    }
}

// =============================================================================
// HIGHLIGHTED TEXT
// =============================================================================

/// One matched region inside a `TextWithHighlights`.
///
/// `begin` defaults to 0 and a missing `end` means "to the end of the text",
/// which is how the upstream treats partially filled highlights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HighlightRange {
    #[serde(rename = "BeginOffset", default, deserialize_with = "lenient::offset")]
    pub begin: usize,
    #[serde(
        rename = "EndOffset",
        default,
        deserialize_with = "lenient::optional_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<usize>,
    /// Upstream marks the best answer span; carried through, never interpreted.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub top_answer: bool,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl HighlightRange {
    pub fn new(begin: usize, end: usize) -> Self {
        HighlightRange {
            begin,
            end: Some(end),
            top_answer: false,
            kind: None,
        }
    }

    /// Resolve to a byte range in `text`, or `None` when the range is empty
    /// or reversed.
    pub fn byte_range(&self, text: &str, unit: OffsetUnit) -> Option<std::ops::Range<usize>> {
        if let Some(end) = self.end {
            if self.begin >= end {
                return None;
            }
        }
        let start = unit.byte_index(text, self.begin);
        let end = match self.end {
            Some(end) => unit.byte_index(text, end),
            None => text.len(),
        };
        (start < end).then_some(start..end)
    }
}

/// A string together with the regions the search service matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextWithHighlights {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub highlights: Vec<HighlightRange>,
}

impl TextWithHighlights {
    pub fn new(text: impl Into<String>, highlights: Vec<HighlightRange>) -> Self {
        TextWithHighlights {
            text: text.into(),
            highlights,
        }
    }

    /// Text with no highlights at all.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }
}

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// Value slot of an attribute record.
///
/// The upstream fills exactly one of these. Only the text-with-highlights
/// variant means anything to rendering; the others are carried opaquely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_with_highlights_value: Option<TextWithHighlights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_list_value: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_value: Option<String>,
}

impl AttributeValue {
    pub fn text(value: TextWithHighlights) -> Self {
        AttributeValue {
            text_with_highlights_value: Some(value),
            ..Default::default()
        }
    }

    pub fn as_text(&self) -> Option<&TextWithHighlights> {
        self.text_with_highlights_value.as_ref()
    }
}

/// One flattened key/value pair attached to a result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeRecord {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default)]
    pub value: Option<AttributeValue>,
}

impl AttributeRecord {
    pub fn text(key: impl Into<String>, value: TextWithHighlights) -> Self {
        AttributeRecord {
            key: key.into(),
            value_type: Some("TEXT_WITH_HIGHLIGHTS_VALUE".to_string()),
            value: Some(AttributeValue::text(value)),
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// The four categories the upstream tags results with.
///
/// Parsed by exact, case-sensitive match. Anything else is not an error, just
/// a category this build doesn't know about yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultKind {
    Document,
    QuestionAnswer,
    Answer,
    Featured,
}

impl ResultKind {
    pub const ALL: [ResultKind; 4] = [
        ResultKind::Document,
        ResultKind::QuestionAnswer,
        ResultKind::Answer,
        ResultKind::Featured,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "DOCUMENT" => Some(ResultKind::Document),
            "QUESTION_ANSWER" => Some(ResultKind::QuestionAnswer),
            "ANSWER" => Some(ResultKind::Answer),
            "FEATURED" => Some(ResultKind::Featured),
            _ => None,
        }
    }

    /// Upstream tag, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Document => "DOCUMENT",
            ResultKind::QuestionAnswer => "QUESTION_ANSWER",
            ResultKind::Answer => "ANSWER",
            ResultKind::Featured => "FEATURED",
        }
    }
}

/// One search hit.
///
/// Featured results share this shape; they simply arrive in a separate list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Raw category tag. See `ResultItem::kind()` for the typed view.
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(rename = "DocumentTitle", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TextWithHighlights>,
    #[serde(rename = "DocumentExcerpt", default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<TextWithHighlights>,
    #[serde(rename = "DocumentURI", default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(rename = "AdditionalAttributes", default, deserialize_with = "lenient::null_as_default")]
    pub attributes: Vec<AttributeRecord>,
}

impl ResultItem {
    /// Typed category, or `None` for a missing or unrecognized tag.
    pub fn kind(&self) -> Option<ResultKind> {
        self.tag.as_deref().and_then(ResultKind::from_tag)
    }

    /// Identifier for feedback, empty when the upstream left it out.
    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}

/// A complete response from the search service.
///
/// Both lists may be absent; that is a valid, empty response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub featured_results_items: Vec<ResultItem>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub result_items: Vec<ResultItem>,
}

impl QueryResponse {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read and parse a response saved to disk.
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&raw)?)
    }
}
