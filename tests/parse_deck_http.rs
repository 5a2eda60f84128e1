//! Integration tests for the deck parsing endpoint.
//!
//! These drive the full HTTP path with a mock generative model: multipart
//! upload -> temp spool -> extraction -> analysis -> persistence -> response.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http::HeaderValue;
use http_body_util::BodyExt;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use deck_parser::adapters::http::{app, DeckHandlers};
use deck_parser::adapters::{
    FsProfileStore, GeminiStartupAnalyzer, MockModel, PdfTextExtractor,
};
use deck_parser::application::ParsePitchDeck;
use deck_parser::ports::{ExtractedText, TextExtractor};

// =============================================================================
// Test Infrastructure
// =============================================================================

const BOUNDARY: &str = "test-boundary";

/// Extractor returning a fixed text, standing in for a readable deck.
struct FixedTextExtractor(&'static str);

#[async_trait]
impl TextExtractor for FixedTextExtractor {
    async fn extract(&self, _path: &Path) -> ExtractedText {
        ExtractedText::from_raw(self.0.to_string())
    }
}

struct TestServer {
    router: Router,
    output_dir: TempDir,
    temp_dir: TempDir,
}

fn test_server(model: MockModel, extractor: Arc<dyn TextExtractor>) -> TestServer {
    let output_dir = TempDir::new().unwrap();
    let temp_dir = TempDir::new().unwrap();

    let analyzer = Arc::new(GeminiStartupAnalyzer::new(Arc::new(model)));
    let use_case = Arc::new(ParsePitchDeck::new(extractor, analyzer));
    let store = Arc::new(FsProfileStore::new(output_dir.path()));
    let handlers = DeckHandlers::new(use_case, store, temp_dir.path().to_path_buf());

    TestServer {
        router: app(handlers, HeaderValue::from_static("http://localhost:3000")),
        output_dir,
        temp_dir,
    }
}

fn multipart_body(file_name: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"pdf_file\"; \
             filename=\"{file_name}\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_deck(router: Router, body: Vec<u8>) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/parse-deck")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn dir_entry_count(path: &Path) -> usize {
    std::fs::read_dir(path).map(|dir| dir.count()).unwrap_or(0)
}

const COMPLETE_REPLY: &str = r#"```json
{
    "companyName": "Acme",
    "description": "Rockets for coyotes",
    "problem": "Roadrunners are fast",
    "solution": "Faster rockets",
    "fundingInfo": "$5M Series A",
    "sectors": ["Aerospace", "B2C"]
}
```"#;

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn real_deck_returns_profile_and_persists_it() {
    let server = test_server(
        MockModel::new().with_reply(COMPLETE_REPLY),
        Arc::new(FixedTextExtractor("Acme builds rockets. Raising $5M.")),
    );

    let (status, body) = post_deck(
        server.router.clone(),
        multipart_body("deck.pdf", b"%PDF-1.4 fake"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["companyName"], "Acme");
    assert_eq!(body["fundingInfo"], "$5M Series A");
    assert_eq!(body["sectors"], serde_json::json!(["Aerospace", "B2C"]));
    assert_eq!(body["marketSize"], serde_json::Value::Null);

    // one persisted artifact, matching the response
    let entries: Vec<_> = std::fs::read_dir(server.output_dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);
    let file_name = entries[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("Acme_profile_"));
    assert!(file_name.ends_with(".json"));

    let persisted: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&entries[0]).unwrap()).unwrap();
    assert_eq!(persisted["companyName"], "Acme");
    assert_eq!(persisted["problem"], "Roadrunners are fast");

    // spooled upload is gone
    assert_eq!(dir_entry_count(server.temp_dir.path()), 0);
}

#[tokio::test]
async fn template_deck_returns_invalid_document_error() {
    let server = test_server(
        MockModel::new().with_reply(r#"{"companyName": "Not found in document"}"#),
        Arc::new(FixedTextExtractor(
            "Put your company name here. Describe the problem here.",
        )),
    );

    let (status, body) = post_deck(
        server.router.clone(),
        multipart_body("template.pdf", b"%PDF-1.4 fake"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "error": "The document appears to be a template, not a specific pitch deck."
        })
    );

    // nothing persisted, temp file removed
    assert_eq!(dir_entry_count(server.output_dir.path()), 0);
    assert_eq!(dir_entry_count(server.temp_dir.path()), 0);
}

#[tokio::test]
async fn model_failure_returns_generic_error() {
    let server = test_server(
        MockModel::new().with_error(deck_parser::ports::ModelError::RateLimited),
        Arc::new(FixedTextExtractor("Acme builds rockets.")),
    );

    let (status, body) = post_deck(
        server.router.clone(),
        multipart_body("deck.pdf", b"%PDF-1.4 fake"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({"error": "Could not generate a profile from the PDF."})
    );
}

#[tokio::test]
async fn incomplete_model_reply_reports_missing_field() {
    let server = test_server(
        MockModel::new().with_reply(
            r#"{"companyName": "Acme", "description": "Rockets", "solution": "Faster rockets"}"#,
        ),
        Arc::new(FixedTextExtractor("Acme builds rockets.")),
    );

    let (status, body) = post_deck(
        server.router.clone(),
        multipart_body("deck.pdf", b"%PDF-1.4 fake"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("problem"), "unexpected error: {message}");
}

#[tokio::test]
async fn unreadable_pdf_never_reaches_the_model() {
    let model = MockModel::new();
    let server = test_server(model.clone(), Arc::new(PdfTextExtractor::new()));

    let (status, body) = post_deck(
        server.router.clone(),
        multipart_body("garbage.pdf", b"not a pdf at all"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({"error": "Could not generate a profile from the PDF."})
    );
    assert_eq!(model.call_count(), 0);
    assert_eq!(dir_entry_count(server.temp_dir.path()), 0);
}

#[tokio::test]
async fn missing_file_part_is_a_bad_request() {
    let server = test_server(
        MockModel::new(),
        Arc::new(FixedTextExtractor("unused")),
    );

    let empty_body = format!("--{BOUNDARY}--\r\n").into_bytes();
    let (status, body) = post_deck(server.router.clone(), empty_body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file uploaded.");
}
