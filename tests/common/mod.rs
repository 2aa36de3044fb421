//! Shared test utilities and fixtures.

#![allow(dead_code)]

use glint::QueryResponse;

// Re-export canonical test utilities from glint::testing
pub use glint::testing::{
    make_excerpt_item, make_faq_item, make_item, FailingSink, RecordingNotifier, RecordingSink,
};

// ============================================================================
// FIXTURE RESPONSES
// ============================================================================

/// A response exercising every bucket, in upstream wire format.
pub const MIXED_RESPONSE: &str = r#"{
    "QueryId": "q-mixed",
    "FeaturedResultsItems": [
        {
            "Id": "feat-1",
            "Type": "DOCUMENT",
            "DocumentTitle": {"Text": "Onboarding guide", "Highlights": [{"BeginOffset": 0, "EndOffset": 10}]},
            "DocumentExcerpt": {"Text": "Start here.", "Highlights": []},
            "DocumentURI": "https://example.com/onboarding"
        }
    ],
    "ResultItems": [
        {
            "Id": "faq-1",
            "Type": "QUESTION_ANSWER",
            "DocumentTitle": {"Text": "FAQ"},
            "DocumentExcerpt": {"Text": "Reset from the settings page."},
            "AdditionalAttributes": [
                {
                    "Key": "QuestionText",
                    "ValueType": "TEXT_WITH_HIGHLIGHTS_VALUE",
                    "Value": {"TextWithHighlightsValue": {"Text": "How do I reset my password?", "Highlights": [{"BeginOffset": 9, "EndOffset": 14}]}}
                },
                {
                    "Key": "AnswerText",
                    "ValueType": "TEXT_WITH_HIGHLIGHTS_VALUE",
                    "Value": {"TextWithHighlightsValue": {"Text": "Reset from the settings page.", "Highlights": [{"BeginOffset": 15, "EndOffset": 23}]}}
                }
            ]
        },
        {
            "Id": "ans-1",
            "Type": "ANSWER",
            "DocumentTitle": {"Text": "Release notes"},
            "DocumentExcerpt": {"Text": "Version 2 ships in March."},
            "DocumentURI": "https://example.com/releases",
            "AdditionalAttributes": [
                {
                    "Key": "AnswerText",
                    "ValueType": "TEXT_WITH_HIGHLIGHTS_VALUE",
                    "Value": {"TextWithHighlightsValue": {
                        "Text": "Version 2 ships in March.",
                        "Highlights": [
                            {"BeginOffset": 0, "EndOffset": 25, "TopAnswer": false},
                            {"BeginOffset": 19, "EndOffset": 24, "TopAnswer": true}
                        ]
                    }}
                }
            ]
        },
        {
            "Id": "ans-2",
            "Type": "ANSWER",
            "AdditionalAttributes": [
                {
                    "Key": "AnswerText",
                    "ValueType": "TEXT_WITH_HIGHLIGHTS_VALUE",
                    "Value": {"TextWithHighlightsValue": {"Text": "It costs 10 dollars.", "Highlights": [{"BeginOffset": 9, "EndOffset": 19}]}}
                }
            ]
        },
        {
            "Id": "doc-1",
            "Type": "DOCUMENT",
            "DocumentTitle": {"Text": "社内規程", "Highlights": [{"BeginOffset": 2, "EndOffset": 4}]},
            "DocumentExcerpt": {"Text": "就業規則の概要", "Highlights": [{"BeginOffset": 0, "EndOffset": 4}]},
            "DocumentURI": "https://s3.ap-northeast-1.amazonaws.com/handbook/rules/summary.pdf"
        },
        {
            "Id": "doc-2",
            "Type": "DOCUMENT",
            "DocumentTitle": {"Text": "Untitled"},
            "DocumentExcerpt": {"Text": "No link here."}
        },
        {
            "Id": "odd-1",
            "Type": "SOMETHING_NEW",
            "DocumentTitle": {"Text": "Ignored"}
        }
    ]
}"#;

/// A response with results but no query id.
pub const ORPHAN_RESPONSE: &str = r#"{
    "ResultItems": [{"Id": "d", "Type": "DOCUMENT", "DocumentTitle": {"Text": "t"}}]
}"#;

pub fn mixed() -> QueryResponse {
    QueryResponse::from_json(MIXED_RESPONSE).expect("fixture parses")
}

pub fn orphan() -> QueryResponse {
    QueryResponse::from_json(ORPHAN_RESPONSE).expect("fixture parses")
}
