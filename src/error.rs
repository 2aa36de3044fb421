//! Error types for glint.
//!
//! The transforms themselves never fail; these cover the edges: reading
//! configuration, parsing responses, and talking to collaborators.

use thiserror::Error;

/// Top-level error type for glint operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A search response was not valid JSON of the expected shape.
    #[error("invalid response: {0}")]
    Response(#[from] serde_json::Error),

    /// Feedback transport errors.
    #[error("feedback error: {0}")]
    Feedback(#[from] FeedbackError),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for `Config`.
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors reported by a feedback transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// The transport rejected or failed to deliver the submission.
    #[error("submission failed: {0}")]
    Transport(String),

    /// The dispatch worker is gone; nothing will be delivered.
    #[error("feedback channel closed")]
    ChannelClosed,
}

/// Errors reported when signing an object-store URI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    /// No credentials are available to sign with.
    #[error("no credentials available")]
    NoCredentials,

    /// The signer failed for another reason.
    #[error("signing failed: {0}")]
    Backend(String),
}

/// Result type for glint operations.
pub type Result<T> = std::result::Result<T, Error>;
