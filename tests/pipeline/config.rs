//! Loading configuration from disk.

use std::io::Write;

use glint::{render, Config, ConfigError, OffsetUnit};

#[test]
fn test_load_overrides_messages() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"messages": {{"notFound": "No results", "documentsHeading": "Related"}}}}"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.messages.not_found, "No results");
    // Unset fields keep their defaults
    assert_eq!(config.messages.load_error, "読み込みエラー");
    assert_eq!(config.offset_unit, OffsetUnit::Char);

    let rendered = render(&glint::Classification::default(), &config);
    assert_eq!(rendered.documents.heading, "Related");
    assert_eq!(rendered.documents.placeholder.as_deref(), Some("No results"));
}

#[test]
fn test_utf16_offsets_from_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"offsetUnit": "utf16"}}"#).unwrap();
    let config = Config::load(file.path()).unwrap();

    let response = glint::QueryResponse::from_json(
        r#"{
            "QueryId": "q",
            "ResultItems": [{
                "Id": "d",
                "Type": "DOCUMENT",
                "DocumentTitle": {"Text": "😀 smile", "Highlights": [{"BeginOffset": 3, "EndOffset": 8}]}
            }]
        }"#,
    )
    .unwrap();
    let rendered = render(&response.classify(), &config);
    assert_eq!(rendered.documents.cards[0].heading.text(), "😀 smile");
    match &rendered.documents.cards[0].heading {
        glint::Heading::Highlighted(spans) => {
            assert_eq!(spans[1].text, "smile");
            assert!(spans[1].highlighted);
        }
        other => panic!("unexpected heading {:?}", other),
    }
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match Config::load(&path) {
        Err(ConfigError::Read { path: reported, .. }) => {
            assert!(reported.ends_with("absent.json"));
        }
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();
    assert!(matches!(
        Config::load(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_discover_prefers_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"noticeDurationMs": 42}}"#).unwrap();
    let config = Config::discover(Some(file.path())).unwrap();
    assert_eq!(config.notice_duration_ms, 42);
}
