// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Partitioning a response into the four buckets the UI draws.
//!
//! A response carries two lists: featured results, which always land in the
//! featured bucket, and ordinary results, which are routed by their category
//! tag. Each bucket keeps input order. Tags we don't recognise are dropped:
//! the upstream adds categories over time and an old build should render
//! what it understands instead of failing.
//!
//! Without a query id there is nothing a user could give feedback on, so the
//! whole classification comes back empty.
//!
//! **Invariant**: classifying the same response twice yields identical buckets.

use serde::Serialize;

use crate::types::{QueryResponse, ResultItem, ResultKind};

/// Which panel an item is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Featured,
    Faq,
    Excerpt,
    Document,
}

impl Bucket {
    /// Render order, top to bottom.
    pub const ALL: [Bucket; 4] = [Bucket::Featured, Bucket::Faq, Bucket::Excerpt, Bucket::Document];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Featured => "featured",
            Bucket::Faq => "faq",
            Bucket::Excerpt => "excerpt",
            Bucket::Document => "document",
        }
    }
}

impl ResultKind {
    /// Bucket for results carrying this tag.
    pub fn bucket(self) -> Bucket {
        match self {
            ResultKind::Featured => Bucket::Featured,
            ResultKind::QuestionAnswer => Bucket::Faq,
            ResultKind::Answer => Bucket::Excerpt,
            ResultKind::Document => Bucket::Document,
        }
    }
}

/// One response, split into buckets. Borrows from the response it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    pub query_id: Option<&'a str>,
    pub featured: Vec<&'a ResultItem>,
    pub faq: Vec<&'a ResultItem>,
    pub excerpt: Vec<&'a ResultItem>,
    pub document: Vec<&'a ResultItem>,
}

impl<'a> Classification<'a> {
    pub fn bucket(&self, bucket: Bucket) -> &[&'a ResultItem] {
        match bucket {
            Bucket::Featured => &self.featured,
            Bucket::Faq => &self.faq,
            Bucket::Excerpt => &self.excerpt,
            Bucket::Document => &self.document,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<&'a ResultItem> {
        match bucket {
            Bucket::Featured => &mut self.featured,
            Bucket::Faq => &mut self.faq,
            Bucket::Excerpt => &mut self.excerpt,
            Bucket::Document => &mut self.document,
        }
    }

    /// Total items across all buckets.
    pub fn len(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.bucket(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a panel for `bucket` should be drawn at all.
    pub fn is_visible(&self, bucket: Bucket) -> bool {
        self.query_id.is_some() && !self.bucket(bucket).is_empty()
    }

    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            featured: self.featured.len(),
            faq: self.faq.len(),
            excerpt: self.excerpt.len(),
            document: self.document.len(),
        }
    }

    /// Every classified item, in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &'a ResultItem)> + '_ {
        Bucket::ALL
            .into_iter()
            .flat_map(move |bucket| self.bucket(bucket).iter().map(move |item| (bucket, *item)))
    }
}

/// Bucket sizes, for summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub featured: usize,
    pub faq: usize,
    pub excerpt: usize,
    pub document: usize,
}

/// Split `results` (and `featured`) into buckets.
pub fn classify<'a>(
    query_id: Option<&'a str>,
    results: &'a [ResultItem],
    featured: &'a [ResultItem],
) -> Classification<'a> {
    let Some(query_id) = query_id else {
        tracing::debug!(
            results = results.len(),
            featured = featured.len(),
            "response has no query id; nothing to render"
        );
        return Classification::default();
    };

    let mut classification = Classification {
        query_id: Some(query_id),
        featured: featured.iter().collect(),
        ..Default::default()
    };

    let mut dropped = 0usize;
    for item in results {
        match item.kind() {
            Some(kind) => classification.bucket_mut(kind.bucket()).push(item),
            None => {
                dropped += 1;
                tracing::trace!(tag = ?item.tag, id = ?item.id, "dropping result with unknown tag");
            }
        }
    }

    tracing::debug!(
        query_id,
        featured = classification.featured.len(),
        faq = classification.faq.len(),
        excerpt = classification.excerpt.len(),
        document = classification.document.len(),
        dropped,
        "classified response"
    );
    classification
}

impl QueryResponse {
    pub fn classify(&self) -> Classification<'_> {
        classify(
            self.query_id.as_deref(),
            &self.result_items,
            &self.featured_results_items,
        )
    }
}
