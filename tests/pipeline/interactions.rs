//! User gestures through to the feedback transport.

use std::sync::Arc;

use crate::common::{mixed, FailingSink, RecordingNotifier, RecordingSink};
use glint::{Action, Config, FeedbackEmitter, FeedbackEvent, Interactions, Relevance};

#[tokio::test]
async fn test_gestures_reach_sink_in_any_order() {
    let response = mixed();
    let config = Config::default();
    let notifier = RecordingNotifier::default();
    let sink = Arc::new(RecordingSink::default());
    let (emitter, worker) = FeedbackEmitter::spawn(sink.clone());

    {
        let classification = response.classify();
        let ui = Interactions::new(&emitter, &notifier, &config, "q-mixed");
        let mut board: Vec<String> = Vec::new();
        ui.dispatch(Action::Open, classification.document[0], &mut board);
        ui.dispatch(Action::ThumbsUp, classification.faq[0], &mut board);
        ui.dispatch(Action::ThumbsDown, classification.excerpt[1], &mut board);
        ui.dispatch(Action::Pin, classification.document[1], &mut board);
        assert_eq!(board, vec!["No link here.".to_string()]);
    }
    drop(emitter);
    worker.await.unwrap();

    let mut events = sink.events();
    events.sort_by(|a, b| a.result_id.cmp(&b.result_id));
    assert_eq!(
        events,
        vec![
            FeedbackEvent::new(Relevance::NotRelevant, Some("ans-2"), "q-mixed"),
            FeedbackEvent::new(Relevance::Click, Some("doc-1"), "q-mixed"),
            FeedbackEvent::new(Relevance::Relevant, Some("faq-1"), "q-mixed"),
        ]
    );

    let titles: Vec<String> = notifier.notices().into_iter().map(|n| n.title).collect();
    assert_eq!(
        titles,
        vec![
            "フィードバックありがとうございます",
            "フィードバックありがとうございます",
            "テキストがピン止めされました",
        ]
    );
}

#[tokio::test]
async fn test_failing_transport_does_not_surface() {
    let response = mixed();
    let config = Config::default();
    let notifier = RecordingNotifier::default();
    let (emitter, worker) = FeedbackEmitter::spawn(Arc::new(FailingSink));

    {
        let classification = response.classify();
        let ui = Interactions::new(&emitter, &notifier, &config, "q-mixed");
        ui.rate(classification.document[0], Relevance::Relevant);
    }
    drop(emitter);
    worker.await.unwrap();

    // The thank-you notice is shown regardless of delivery
    assert_eq!(notifier.notices().len(), 1);
}

#[tokio::test]
async fn test_missing_result_id_is_sent_as_empty() {
    let (emitter, mut queue) = FeedbackEmitter::channel();
    let mut item = crate::common::make_item("x", "DOCUMENT");
    item.id = None;

    let config = Config::default();
    let notifier = RecordingNotifier::default();
    Interactions::new(&emitter, &notifier, &config, "q").open(&item);

    let event = queue.recv().await.unwrap();
    assert_eq!(event.result_id, "");
    assert_eq!(event.relevance, Relevance::Click);
    assert!(notifier.notices().is_empty());
}

#[test]
fn test_notice_duration_follows_config() {
    let (emitter, _queue) = FeedbackEmitter::channel();
    let config = Config {
        notice_duration_ms: 2500,
        ..Config::default()
    };
    let notifier = RecordingNotifier::default();
    let item = crate::common::make_item("x", "DOCUMENT");
    let mut board: Vec<String> = Vec::new();
    Interactions::new(&emitter, &notifier, &config, "q").pin(&item, &mut board);

    let notices = notifier.notices();
    assert_eq!(notices[0].duration_ms, 2500);
    assert!(notices[0].closable);
    assert_eq!(board, vec!["Excerpt x".to_string()]);
}
