//! Render-ready views of document-search responses.
//!
//! This crate turns a raw, loosely-typed search response into four typed
//! buckets (featured, FAQ, extracted answer, document) with exact highlight
//! segments, and carries the user's relevance feedback back out without ever
//! blocking on it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │   types.rs   │────▶│  classify.rs  │────▶│  render.rs   │
//! │(QueryResponse│     │ (Classification│    │ (Rendered,   │
//! │  ResultItem) │     │   Bucket)     │     │  Card, Span) │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!                                                   │
//!        ┌──────────────────┬───────────────────────┤
//!        ▼                  ▼                       ▼
//! ┌──────────────┐   ┌──────────────┐      ┌────────────────┐
//! │ highlight.rs │   │ attributes.rs│      │   answer.rs    │
//! │  (resolve,   │   │  (lookup,    │      │ (answer_noun)  │
//! │   Segments)  │   │  sentinel)   │      │                │
//! └──────────────┘   └──────────────┘      └────────────────┘
//!
//! user gestures ──▶ interaction.rs ──▶ feedback.rs ──▶ FeedbackSink
//!                      (notices, pins)    (mpsc worker)
//! ```
//!
//! Everything above the feedback channel is pure and synchronous; a response
//! is re-classified from scratch whenever it changes.
//!
//! # Usage
//!
//! ```
//! use glint::{render, Config, QueryResponse};
//!
//! let response = QueryResponse::from_json(r#"{
//!     "QueryId": "q-1",
//!     "ResultItems": [{
//!         "Id": "r-1",
//!         "Type": "DOCUMENT",
//!         "DocumentTitle": {"Text": "Getting started", "Highlights": [{"BeginOffset": 0, "EndOffset": 7}]}
//!     }]
//! }"#).unwrap();
//!
//! let rendered = render(&response.classify(), &Config::default());
//! assert_eq!(rendered.documents.cards.len(), 1);
//! ```

pub mod answer;
pub mod attributes;
pub mod classify;
pub mod config;
pub mod context;
pub mod error;
pub mod feedback;
pub mod highlight;
pub mod interaction;
pub mod render;
pub mod testing;
pub mod types;
pub mod uri;

// Re-exports for public API
pub use answer::{answer_noun, answer_noun_with};
pub use attributes::{
    lookup, text_attribute, text_attribute_or, AttributeLookup, ANSWER_KEY, NOT_FOUND_TEXT,
    QUESTION_KEY,
};
pub use classify::{classify, Bucket, BucketCounts, Classification};
pub use config::{AttributeKeys, Config, Messages};
pub use context::{build_context, ContextDocument, ContextStyle};
pub use error::{ConfigError, Error, FeedbackError, Result, SignError};
pub use feedback::{FeedbackEmitter, FeedbackEvent, FeedbackQueue, FeedbackSink, Relevance};
pub use highlight::{merge_ranges, resolve, spans, Segment, Segments, Span};
pub use interaction::{Action, Interactions, Notice, NoticeStatus, Notifier, PinBoard};
pub use render::{render, Card, DocumentSection, Heading, Panel, Rendered};
pub use types::{
    AttributeRecord, AttributeValue, HighlightRange, OffsetUnit, QueryResponse, ResultItem,
    ResultKind, TextWithHighlights,
};
pub use uri::{rewrite_uris, S3Location, UriSigner};
