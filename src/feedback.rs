// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fire-and-forget relevance feedback.
//!
//! The UI must never wait on feedback, and a failed submission must never
//! change what's rendered. So `FeedbackEmitter::emit` only pushes onto an
//! unbounded channel and returns. A worker task drains the channel and spawns
//! one submission per event, which means:
//!
//! - several submissions can be in flight at once;
//! - there is no ordering guarantee between them;
//! - nothing is deduplicated (rating the same result twice sends twice);
//! - failures are logged and dropped, never retried.
//!
//! The transport itself sits behind `FeedbackSink`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

use crate::error::FeedbackError;

/// What the user told us about a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relevance {
    /// Followed the result's link.
    Click,
    /// Thumbs up.
    Relevant,
    /// Thumbs down.
    NotRelevant,
}

impl Relevance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relevance::Click => "CLICK",
            Relevance::Relevant => "RELEVANT",
            Relevance::NotRelevant => "NOT_RELEVANT",
        }
    }
}

/// One feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEvent {
    pub relevance: Relevance,
    pub result_id: String,
    pub query_id: String,
}

impl FeedbackEvent {
    /// A missing result id becomes the empty string.
    pub fn new(relevance: Relevance, result_id: Option<&str>, query_id: &str) -> Self {
        FeedbackEvent {
            relevance,
            result_id: result_id.unwrap_or_default().to_string(),
            query_id: query_id.to_string(),
        }
    }
}

/// Outbound transport for feedback.
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    /// Deliver one event. The result is logged, never acted on.
    async fn submit(&self, event: FeedbackEvent) -> Result<(), FeedbackError>;
}

/// Handle the UI holds to send feedback without waiting.
///
/// Cheap to clone. Dropping every clone closes the channel; the worker then
/// finishes the submissions already in flight and exits.
#[derive(Debug, Clone)]
pub struct FeedbackEmitter {
    tx: mpsc::UnboundedSender<FeedbackEvent>,
}

impl FeedbackEmitter {
    /// Create an emitter and the receiving end, without starting a worker.
    pub fn channel() -> (Self, FeedbackQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        (FeedbackEmitter { tx }, FeedbackQueue { rx })
    }

    /// Create an emitter whose worker runs on the current tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn spawn(sink: Arc<dyn FeedbackSink>) -> (Self, JoinHandle<()>) {
        Self::spawn_on(sink, &tokio::runtime::Handle::current())
    }

    /// Create an emitter whose worker runs on `runtime`.
    pub fn spawn_on(
        sink: Arc<dyn FeedbackSink>,
        runtime: &tokio::runtime::Handle,
    ) -> (Self, JoinHandle<()>) {
        let (emitter, queue) = Self::channel();
        let worker = runtime.spawn(queue.run(sink));
        (emitter, worker)
    }

    /// Queue `relevance` feedback for `result_id` under `query_id`.
    ///
    /// Never blocks and never fails from the caller's point of view.
    pub fn emit(&self, relevance: Relevance, result_id: Option<&str>, query_id: &str) {
        self.send(FeedbackEvent::new(relevance, result_id, query_id));
    }

    /// Queue a prepared event.
    pub fn send(&self, event: FeedbackEvent) {
        if let Err(err) = self.tx.send(event) {
            tracing::warn!(
                relevance = err.0.relevance.as_str(),
                result_id = %err.0.result_id,
                error = %FeedbackError::ChannelClosed,
                "feedback dropped"
            );
        }
    }
}

/// Receiving end of a `FeedbackEmitter`.
#[derive(Debug)]
pub struct FeedbackQueue {
    rx: mpsc::UnboundedReceiver<FeedbackEvent>,
}

impl FeedbackQueue {
    /// Drain the queue into `sink` until every emitter is dropped, then wait
    /// for outstanding submissions.
    pub async fn run(mut self, sink: Arc<dyn FeedbackSink>) {
        let mut in_flight = JoinSet::new();
        loop {
            tokio::select! {
                event = self.rx.recv() => match event {
                    Some(event) => {
                        in_flight.spawn(submit(Arc::clone(&sink), event));
                    }
                    None => break,
                },
                Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
            }
        }
        while in_flight.join_next().await.is_some() {}
        tracing::debug!("feedback queue closed");
    }

    /// Take the next event without submitting it.
    pub async fn recv(&mut self) -> Option<FeedbackEvent> {
        self.rx.recv().await
    }
}

async fn submit(sink: Arc<dyn FeedbackSink>, event: FeedbackEvent) {
    let relevance = event.relevance;
    let result_id = event.result_id.clone();
    match sink.submit(event).await {
        Ok(()) => tracing::debug!(relevance = relevance.as_str(), %result_id, "feedback submitted"),
        Err(err) => tracing::warn!(
            relevance = relevance.as_str(),
            %result_id,
            error = %err,
            "feedback submission failed"
        ),
    }
}
