//! Integration tests for the describe relay
#![allow(clippy::expect_used)]

use std::sync::Arc;

use ai_vision::{
    DescribeEngine, DescribeRequest, DescribeResponse, LlavaClient, LlavaConfig, VisionError,
};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::json;
use tokio::sync::Mutex;

/// Stub completion backend recording what it is asked to describe
struct StubDescriber {
    answer: String,
    healthy: bool,
    seen: Mutex<Vec<String>>,
}

impl StubDescriber {
    fn answering(text: &str) -> Self {
        Self {
            answer: text.to_string(),
            healthy: true,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn down() -> Self {
        Self {
            answer: String::new(),
            healthy: false,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DescribeEngine for StubDescriber {
    async fn describe(&self, request: DescribeRequest) -> Result<DescribeResponse, VisionError> {
        if !self.healthy {
            return Err(VisionError::ConnectionFailed("refused".to_string()));
        }
        self.seen.lock().await.push(request.image_base64);
        Ok(DescribeResponse {
            text: self.answer.clone(),
        })
    }

    async fn health_check(&self) -> Result<bool, VisionError> {
        Ok(self.healthy)
    }

    fn endpoint(&self) -> &str {
        "stub://completion"
    }
}

fn server_with(describer: Arc<dyn DescribeEngine>) -> TestServer {
    let state = AppState::new(describer);
    TestServer::new(create_router(state)).expect("test server")
}

// ============================================================================
// Describe Endpoint Tests
// ============================================================================

#[tokio::test]
async fn describe_returns_model_result() {
    let server = server_with(Arc::new(StubDescriber::answering("apple")));

    let response = server
        .post("/describe")
        .json(&json!({"image": "aGVsbG8="}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["result"], "apple");
}

#[tokio::test]
async fn describe_forwards_image_untouched() {
    let stub = Arc::new(StubDescriber::answering("ok"));
    let server = server_with(stub.clone());

    server
        .post("/describe")
        .json(&json!({"image": "Zm9vYmFy"}))
        .await;

    let seen = stub.seen.lock().await;
    assert_eq!(seen.as_slice(), ["Zm9vYmFy"]);
}

#[tokio::test]
async fn describe_without_image_is_bad_request() {
    let server = server_with(Arc::new(StubDescriber::answering("unused")));

    let response = server.post("/describe").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn describe_with_empty_image_is_bad_request() {
    let server = server_with(Arc::new(StubDescriber::answering("unused")));

    let response = server.post("/describe").json(&json!({"image": ""})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn describe_with_invalid_base64_is_bad_request() {
    let server = server_with(Arc::new(StubDescriber::answering("unused")));

    let response = server
        .post("/describe")
        .json(&json!({"image": "!!! definitely not base64 !!!"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("base64")
    );
}

#[tokio::test]
async fn describe_with_garbage_body_is_bad_request() {
    let server = server_with(Arc::new(StubDescriber::answering("unused")));

    let response = server
        .post("/describe")
        .text("this is not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn describe_when_upstream_down_is_service_unavailable() {
    let server = server_with(Arc::new(StubDescriber::down()));

    let response = server
        .post("/describe")
        .json(&json!({"image": "aGVsbG8="}))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "service_unavailable");
}

// ============================================================================
// Health Endpoint Tests
// ============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let server = server_with(Arc::new(StubDescriber::answering("unused")));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn ready_reports_upstream_health() {
    let server = server_with(Arc::new(StubDescriber::answering("unused")));

    let response = server.get("/ready").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
}

#[tokio::test]
async fn ready_degrades_when_upstream_down() {
    let server = server_with(Arc::new(StubDescriber::down()));

    let response = server.get("/ready").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], false);
}

// ============================================================================
// End-to-End Tests Against a Mock Completion Server
// ============================================================================

#[tokio::test]
async fn relay_round_trip_through_llava() {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_llava = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/completion"))
        .and(body_partial_json(json!({
            "n_predict": 128,
            "stream": false,
            "image_data": [{"data": "aGVsbG8=", "id": 12}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "A red apple."
        })))
        .expect(1)
        .mount(&mock_llava)
        .await;

    let llava_config = LlavaConfig {
        base_url: mock_llava.uri(),
        ..Default::default()
    };
    let client = LlavaClient::new(llava_config).expect("llava client");
    let server = server_with(Arc::new(client));

    let response = server
        .post("/describe")
        .json(&json!({"image": "aGVsbG8="}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["result"], "A red apple.");
}

#[tokio::test]
async fn relay_surfaces_llava_failure_as_unavailable() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_llava = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/completion"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .expect(1)
        .mount(&mock_llava)
        .await;

    let llava_config = LlavaConfig {
        base_url: mock_llava.uri(),
        ..Default::default()
    };
    let client = LlavaClient::new(llava_config).expect("llava client");
    let server = server_with(Arc::new(client));

    let response = server
        .post("/describe")
        .json(&json!({"image": "aGVsbG8="}))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}
