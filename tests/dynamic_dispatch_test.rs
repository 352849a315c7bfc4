mod common;

use quote_engine::domain::ports::QuoteRequestSinkBox;
use quote_engine::domain::quote::QuoteRequest;
use quote_engine::infrastructure::in_memory::InMemoryRequestSink;
use quote_engine::infrastructure::json_lines::JsonLinesSink;

#[tokio::test]
async fn test_sinks_as_trait_objects() {
    let recorder = InMemoryRequestSink::new();
    let dir = tempfile::tempdir().unwrap();
    let outbox = dir.path().join("outbox.jsonl");

    let sinks: Vec<QuoteRequestSinkBox> = vec![
        Box::new(recorder.clone()),
        Box::new(JsonLinesSink::open(&outbox).unwrap()),
    ];

    let mut session = common::builtin_session();
    session.select_package("package_basic");

    for sink in &sinks {
        session
            .submit(&**sink, "Minh", "0987654321")
            .await
            .unwrap();
    }

    assert_eq!(recorder.submissions().await.len(), 1);
    let line = std::fs::read_to_string(&outbox).unwrap();
    let stored: QuoteRequest = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(stored, recorder.submissions().await[0]);
}

#[tokio::test]
async fn test_sink_is_send_and_sync() {
    let sink: QuoteRequestSinkBox = Box::new(InMemoryRequestSink::new());

    // Verify Send + Sync by submitting from a spawned task
    let handle = tokio::spawn(async move {
        sink.submit(QuoteRequest {
            name: "Minh".to_string(),
            phone: "0987654321".to_string(),
            note: String::new(),
        })
        .await
    });

    assert!(handle.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_invalid_contact_is_not_submitted() {
    let recorder = InMemoryRequestSink::new();
    let mut session = common::builtin_session();
    session.select_package("package_basic");

    let result = session.submit(&recorder, "  ", "0987654321").await;
    assert!(result.is_err());
    assert!(recorder.submissions().await.is_empty());
}
