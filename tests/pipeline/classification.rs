//! Bucket membership and ordering for realistic responses.

use crate::common::{make_item, mixed, orphan};
use glint::{classify, Bucket, BucketCounts, QueryResponse};

fn ids(items: &[&glint::ResultItem]) -> Vec<String> {
    items.iter().map(|i| i.id_or_empty().to_string()).collect()
}

#[test]
fn test_mixed_response_counts() {
    let response = mixed();
    let classification = response.classify();
    assert_eq!(classification.query_id, Some("q-mixed"));
    assert_eq!(
        classification.counts(),
        BucketCounts {
            featured: 1,
            faq: 1,
            excerpt: 2,
            document: 2,
        }
    );
    // The unknown tag is dropped rather than misfiled
    assert_eq!(classification.len(), 6);
}

#[test]
fn test_buckets_preserve_upstream_order() {
    let response = mixed();
    let classification = response.classify();
    assert_eq!(ids(&classification.excerpt), vec!["ans-1", "ans-2"]);
    assert_eq!(ids(&classification.document), vec!["doc-1", "doc-2"]);
}

#[test]
fn test_orphan_response_renders_nothing() {
    let response = orphan();
    let classification = response.classify();
    assert!(classification.is_empty());
    for bucket in Bucket::ALL {
        assert!(!classification.is_visible(bucket));
    }
}

#[test]
fn test_featured_tag_follows_featured_list() {
    let featured = vec![make_item("listed", "DOCUMENT")];
    let results = vec![
        make_item("tagged", "FEATURED"),
        make_item("doc", "DOCUMENT"),
    ];
    let classification = classify(Some("q"), &results, &featured);
    assert_eq!(ids(&classification.featured), vec!["listed", "tagged"]);
    assert_eq!(ids(&classification.document), vec!["doc"]);
}

#[test]
fn test_each_result_lands_in_at_most_one_bucket() {
    let response = mixed();
    let classification = response.classify();
    let mut seen: Vec<&str> = classification
        .iter()
        .map(|(_, item)| item.id_or_empty())
        .collect();
    let total = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), total);
}

#[test]
fn test_absent_lists_are_empty() {
    let response = QueryResponse::from_json(r#"{"QueryId": "q"}"#).unwrap();
    let classification = response.classify();
    assert_eq!(classification.query_id, Some("q"));
    assert!(classification.is_empty());
}

#[test]
fn test_tags_are_case_sensitive() {
    let results = vec![make_item("a", "document"), make_item("b", "Answer")];
    assert!(classify(Some("q"), &results, &[]).is_empty());
}
