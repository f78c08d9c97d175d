//! Integration tests for the vision clients against a mock HTTP server

use ai_vision::{
    DescribeEngine, DescribeRequest, LlavaClient, LlavaConfig, RelayDescribeClient, VisionConfig,
    VisionError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

fn relay_config(url: &str) -> VisionConfig {
    VisionConfig {
        base_url: url.to_string(),
        timeout_ms: Some(5_000),
    }
}

fn llava_config(url: &str) -> LlavaConfig {
    LlavaConfig {
        base_url: url.to_string(),
        timeout_ms: Some(5_000),
        ..Default::default()
    }
}

// ============================================================================
// Relay Client Tests
// ============================================================================

#[tokio::test]
async fn test_relay_describe_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/describe"))
        .and(body_partial_json(serde_json::json!({
            "image": "aGVsbG8="
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "apple"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayDescribeClient::new(relay_config(&mock_server.uri())).unwrap();
    let response = client.describe(DescribeRequest::new("aGVsbG8=")).await;

    assert!(response.is_ok());
    assert_eq!(response.unwrap().text, "apple");
}

#[tokio::test]
async fn test_relay_describe_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/describe"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream unreachable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayDescribeClient::new(relay_config(&mock_server.uri())).unwrap();
    let result = client.describe(DescribeRequest::new("aGVsbG8=")).await;

    match result {
        Err(VisionError::ServerError(msg)) => {
            assert!(msg.contains("500"), "message should carry status: {msg}");
            assert!(msg.contains("upstream unreachable"));
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_relay_describe_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/describe"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayDescribeClient::new(relay_config(&mock_server.uri())).unwrap();
    let result = client.describe(DescribeRequest::new("aGVsbG8=")).await;

    assert!(matches!(result, Err(VisionError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_relay_describe_missing_result_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/describe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "description": "wrong key"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayDescribeClient::new(relay_config(&mock_server.uri())).unwrap();
    let result = client.describe(DescribeRequest::new("aGVsbG8=")).await;

    assert!(matches!(result, Err(VisionError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_relay_health_check_healthy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayDescribeClient::new(relay_config(&mock_server.uri())).unwrap();
    let healthy = client.health_check().await.unwrap();

    assert!(healthy);
}

#[tokio::test]
async fn test_relay_health_check_unhealthy_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayDescribeClient::new(relay_config(&mock_server.uri())).unwrap();
    let healthy = client.health_check().await.unwrap();

    assert!(!healthy);
}

#[tokio::test]
async fn test_relay_health_check_server_down() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = RelayDescribeClient::new(relay_config(&uri)).unwrap();
    let healthy = client.health_check().await.unwrap();

    assert!(!healthy);
}

// ============================================================================
// LLaVA Client Tests
// ============================================================================

#[tokio::test]
async fn test_llava_describe_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/completion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": " A red apple on a wooden table."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = LlavaClient::new(llava_config(&mock_server.uri())).unwrap();
    let response = client.describe(DescribeRequest::new("aGVsbG8=")).await;

    assert!(response.is_ok());
    // Content comes back verbatim, leading whitespace included.
    assert_eq!(response.unwrap().text, " A red apple on a wooden table.");
}

#[tokio::test]
async fn test_llava_request_carries_prompt_and_image_slot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/completion"))
        .and(body_partial_json(serde_json::json!({
            "prompt": "USER:[img-12]Describe the image briefly and accurately.\nASSISTANT:",
            "n_predict": 128,
            "stream": false,
            "image_data": [{"data": "aGVsbG8=", "id": 12}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "ok"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = LlavaClient::new(llava_config(&mock_server.uri())).unwrap();
    let response = client.describe(DescribeRequest::new("aGVsbG8=")).await;

    assert!(response.is_ok());
}

#[tokio::test]
async fn test_llava_describe_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/completion"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = LlavaClient::new(llava_config(&mock_server.uri())).unwrap();
    let result = client.describe(DescribeRequest::new("aGVsbG8=")).await;

    match result {
        Err(VisionError::ServerError(msg)) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("model not loaded"));
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_llava_health_check_healthy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = LlavaClient::new(llava_config(&mock_server.uri())).unwrap();
    let healthy = client.health_check().await.unwrap();

    assert!(healthy);
}

#[tokio::test]
async fn test_llava_health_check_server_down() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = LlavaClient::new(llava_config(&uri)).unwrap();
    let healthy = client.health_check().await.unwrap();

    assert!(!healthy);
}
