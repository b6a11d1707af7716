//! Integration tests for the reqwest transport against a mock RAG service

use rag_workbench::types::Distance;
use rag_workbench::{ClientConfig, Error, HttpBackend, PendingFile, RagBackend};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> HttpBackend {
    let config = ClientConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..ClientConfig::default()
    };
    HttpBackend::new(&config).unwrap()
}

#[tokio::test]
async fn stats_parses_the_snapshot_and_ignores_extra_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_chunks": 128,
            "model": "answerer-7b",
            "embedding": "default (MiniLM ONNX)"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stats = backend_for(&server).fetch_stats().await.unwrap();
    assert_eq!(stats.total_chunks, 128);
    assert_eq!(stats.model, "answerer-7b");
}

#[tokio::test]
async fn documents_unwraps_the_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                {"filename": "guide.pdf", "chunks": 7},
                {"filename": "notes.txt", "chunks": 2}
            ]
        })))
        .mount(&server)
        .await;

    let documents = backend_for(&server).fetch_documents().await.unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].filename, "guide.pdf");
    assert_eq!(documents[1].chunks, 2);
}

#[tokio::test]
async fn search_sends_query_and_k_as_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "refund policy"))
        .and(query_param("k", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"filename": "faq.md", "idx": 1, "distance": 0.42, "snippet": "..."},
                {"filename": "faq.md", "idx": 9, "distance": "n/a", "snippet": "..."}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = backend_for(&server).search("refund policy", 4).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].distance, Distance::Number(0.42));
    assert_eq!(results[1].distance, Distance::Raw("n/a".to_string()));
}

#[tokio::test]
async fn ask_posts_the_json_body_and_parses_the_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_partial_json(json!({
            "question": "Summarize section 2",
            "k": 4,
            "temperature": 0.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "**bold**",
            "sources": ["doc.pdf"],
            "snippets": ["Section 2 covers..."]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = backend_for(&server)
        .ask("Summarize section 2", 4, 0.5)
        .await
        .unwrap();
    assert_eq!(response.answer, "**bold**");
    assert_eq!(response.sources, vec!["doc.pdf".to_string()]);
    assert_eq!(response.snippets.len(), 1);
}

#[tokio::test]
async fn upload_posts_multipart_and_parses_the_receipt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"filename": "guide.pdf", "status": "success", "chunks": 7},
                {"filename": "blank.txt", "status": "empty", "chunks": 0}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let files = vec![
        PendingFile::new("guide.pdf", b"%PDF-1.4".to_vec()).with_content_type("application/pdf"),
        PendingFile::new("blank.txt", Vec::new()),
    ];
    let receipt = backend_for(&server).upload(&files).await.unwrap();
    assert_eq!(receipt.results.len(), 2);
    assert_eq!(receipt.results[0].status, "success");
}

#[tokio::test]
async fn reset_succeeds_and_ignores_the_acknowledgment_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    backend_for(&server).reset_index().await.unwrap();
}

#[tokio::test]
async fn server_errors_surface_as_transport_failures_with_the_operation_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = backend_for(&server).fetch_stats().await.unwrap_err();
    assert_eq!(err.operation(), Some("stats"));
    assert!(matches!(err, Error::Transport { .. }));
}

#[tokio::test]
async fn malformed_bodies_surface_as_transport_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = backend_for(&server).search("q", 1).await.unwrap_err();
    assert_eq!(err.operation(), Some("search"));
}

#[tokio::test]
async fn connection_failures_surface_as_transport_failures() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..ClientConfig::default()
    };
    let backend = HttpBackend::new(&config).unwrap();

    let err = backend.fetch_documents().await.unwrap_err();
    assert_eq!(err.operation(), Some("documents"));
}
