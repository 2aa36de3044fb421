//! Rendered panels for the mixed fixture.

use crate::common::{make_item, mixed};
use glint::{render, Bucket, Config, Heading, Span};

fn span(text: &str, highlighted: bool) -> Span {
    Span {
        text: text.to_string(),
        highlighted,
    }
}

#[test]
fn test_panel_order_and_visibility() {
    let rendered = render(&mixed().classify(), &Config::default());
    let buckets: Vec<Bucket> = rendered.panels().map(|p| p.bucket).collect();
    assert_eq!(buckets, vec![Bucket::Featured, Bucket::Faq, Bucket::Excerpt]);
    assert_eq!(rendered.query_id.as_deref(), Some("q-mixed"));
}

#[test]
fn test_featured_card_has_no_ratings() {
    let rendered = render(&mixed().classify(), &Config::default());
    let featured = rendered.featured.expect("featured panel");
    let card = &featured.cards[0];
    assert_eq!(card.tab.as_deref(), Some("おすすめの文章 0"));
    assert!(!card.ratings);
    assert_eq!(
        card.heading,
        Heading::Highlighted(vec![span("Onboarding", true), span(" guide", false)])
    );
    assert_eq!(card.link.as_deref(), Some("https://example.com/onboarding"));
}

#[test]
fn test_faq_card_renders_question_and_answer() {
    let rendered = render(&mixed().classify(), &Config::default());
    let card = &rendered.faq.expect("faq panel").cards[0];
    assert_eq!(
        card.heading,
        Heading::Highlighted(vec![
            span("How do I ", false),
            span("reset", true),
            span(" my password?", false),
        ])
    );
    assert_eq!(
        card.body,
        vec![
            span("Reset from the ", false),
            span("settings", true),
            span(" page.", false),
        ]
    );
    assert_eq!(card.pin_text, "Reset from the settings page.");
}

#[test]
fn test_excerpt_headings_use_short_answer() {
    let rendered = render(&mixed().classify(), &Config::default());
    let panel = rendered.excerpt.expect("excerpt panel");

    // Two highlights: no short answer, and the overlap merges into one run
    let first = &panel.cards[0];
    assert_eq!(first.heading, Heading::Strong(String::new()));
    assert_eq!(first.body, vec![span("Version 2 ships in March.", true)]);
    assert_eq!(first.tab.as_deref(), Some("抜粋された文章 0"));

    let second = &panel.cards[1];
    assert_eq!(second.heading, Heading::Strong("10 dollars".to_string()));
    assert_eq!(second.tab.as_deref(), Some("抜粋された文章 1"));
    // No excerpt to pin
    assert_eq!(second.pin_text, "読み込みエラー");
}

#[test]
fn test_document_cards_handle_multibyte_and_missing_links() {
    let rendered = render(&mixed().classify(), &Config::default());
    let docs = &rendered.documents;
    assert_eq!(docs.heading, "関連する文章");
    assert_eq!(docs.placeholder, None);
    assert_eq!(docs.cards.len(), 2);

    let first = &docs.cards[0];
    assert_eq!(
        first.heading,
        Heading::Highlighted(vec![span("社内", false), span("規程", true)])
    );
    assert_eq!(first.body, vec![span("就業規則", true), span("の概要", false)]);
    assert_eq!(first.tab, None);

    assert_eq!(docs.cards[1].link.as_deref(), Some("#"));
}

#[test]
fn test_empty_documents_show_placeholder() {
    let results = vec![make_item("a", "ANSWER")];
    let response = glint::QueryResponse {
        query_id: Some("q".into()),
        result_items: results,
        ..Default::default()
    };
    let rendered = render(&response.classify(), &Config::default());
    assert!(rendered.documents.cards.is_empty());
    assert_eq!(rendered.documents.placeholder.as_deref(), Some("該当なし"));
    // Missing answer attribute falls back to the sentinel
    let card = &rendered.excerpt.expect("excerpt panel").cards[0];
    assert_eq!(card.body, vec![span("該当なし", false)]);
}

#[test]
fn test_rendered_serializes_for_the_view_layer() {
    let rendered = render(&mixed().classify(), &Config::default());
    let json = serde_json::to_value(&rendered).unwrap();
    assert_eq!(json["queryId"], "q-mixed");
    assert_eq!(json["excerpt"]["cards"][1]["heading"]["kind"], "strong");
    assert_eq!(json["documents"]["cards"][0]["resultId"], "doc-1");
}

#[test]
fn test_malformed_offsets_and_null_lists_still_render() {
    let response = glint::QueryResponse::from_json(
        r#"{
            "QueryId": "q",
            "FeaturedResultsItems": null,
            "ResultItems": [{
                "Id": "d",
                "Type": "DOCUMENT",
                "DocumentTitle": {"Text": "abcdef", "Highlights": [{"BeginOffset": -2, "EndOffset": 3}]},
                "DocumentExcerpt": {"Text": "excerpt", "Highlights": null},
                "AdditionalAttributes": null
            }]
        }"#,
    )
    .unwrap();
    let rendered = render(&response.classify(), &Config::default());
    assert!(rendered.featured.is_none());
    let card = &rendered.documents.cards[0];
    assert_eq!(
        card.heading,
        Heading::Highlighted(vec![span("abc", true), span("def", false)])
    );
    assert_eq!(card.body, vec![span("excerpt", false)]);
}
