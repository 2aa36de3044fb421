// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration.
//!
//! A single JSON document, every field optional. The UI strings are passed
//! through exactly as written; the defaults are the literals the product
//! shipped with.
//!
//! ```json
//! {
//!   "offsetUnit": "utf16",
//!   "messages": { "notFound": "No results" },
//!   "noticeDurationMs": 1500
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::attributes::{ANSWER_KEY, NOT_FOUND_TEXT, QUESTION_KEY};
use crate::error::ConfigError;
use crate::types::OffsetUnit;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "GLINT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// What highlight offsets count.
    pub offset_unit: OffsetUnit,
    pub messages: Messages,
    /// How long confirmation notices stay up.
    pub notice_duration_ms: u64,
    pub attributes: AttributeKeys,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            offset_unit: OffsetUnit::Char,
            messages: Messages::default(),
            notice_duration_ms: 1000,
            attributes: AttributeKeys::default(),
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `path` if given, else the file named by `GLINT_CONFIG`, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Literal UI strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Messages {
    /// Stand-in for a missing attribute, and the empty document list.
    pub not_found: String,
    /// Stand-in for a payload that is present but unreadable.
    pub load_error: String,
    /// Notice after pinning a snippet.
    pub pinned: String,
    /// Notice after a thumbs-up or thumbs-down.
    pub feedback_thanks: String,
    pub featured_tab: String,
    pub excerpt_tab: String,
    pub faq_tab: String,
    pub documents_heading: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            not_found: NOT_FOUND_TEXT.to_string(),
            load_error: "読み込みエラー".to_string(),
            pinned: "テキストがピン止めされました".to_string(),
            feedback_thanks: "フィードバックありがとうございます".to_string(),
            featured_tab: "おすすめの文章".to_string(),
            excerpt_tab: "抜粋された文章".to_string(),
            faq_tab: "よくある質問".to_string(),
            documents_heading: "関連する文章".to_string(),
        }
    }
}

/// Attribute keys FAQ and answer results store their text under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeKeys {
    pub question: String,
    pub answer: String,
}

impl Default for AttributeKeys {
    fn default() -> Self {
        AttributeKeys {
            question: QUESTION_KEY.to_string(),
            answer: ANSWER_KEY.to_string(),
        }
    }
}
