//! HTTP client for a llama.cpp completion server running LLaVA

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    config::LlavaConfig,
    error::VisionError,
    ports::{DescribeEngine, DescribeRequest, DescribeResponse},
};

/// Image payload entry for the completion request
#[derive(Debug, Serialize)]
struct ImageData {
    data: String,
    id: u32,
}

/// Wire request for the completion endpoint
#[derive(Debug, Serialize)]
struct CompletionRequest {
    prompt: String,
    n_predict: u32,
    image_data: Vec<ImageData>,
    stream: bool,
}

/// Wire response from the completion endpoint
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: String,
}

/// Client for a llama.cpp server hosting a LLaVA model
#[derive(Debug)]
pub struct LlavaClient {
    client: reqwest::Client,
    config: LlavaConfig,
}

impl LlavaClient {
    /// Create a new LLaVA client
    pub fn new(config: LlavaConfig) -> Result<Self, VisionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| VisionError::ConnectionFailed(e.to_string()))?;

        info!(base_url = %config.base_url, "LLaVA client initialized");

        Ok(Self { client, config })
    }

    /// Build a full API URL from a path
    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl DescribeEngine for LlavaClient {
    async fn describe(&self, request: DescribeRequest) -> Result<DescribeResponse, VisionError> {
        let url = self.api_url("completion");
        debug!(url = %url, n_predict = self.config.n_predict, "Sending completion request");

        let body = CompletionRequest {
            prompt: self.config.prompt.clone(),
            n_predict: self.config.n_predict,
            image_data: vec![ImageData {
                data: request.image_base64,
                id: self.config.image_id,
            }],
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Completion server returned an error");
            return Err(VisionError::ServerError(format!(
                "Status {status}: {text}"
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| VisionError::InvalidResponse(e.to_string()))?;

        debug!(
            content_chars = completion.content.len(),
            "Completion request finished"
        );

        Ok(DescribeResponse {
            text: completion.content,
        })
    }

    async fn health_check(&self) -> Result<bool, VisionError> {
        let url = self.api_url("health");

        let result = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match result {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) if e.is_timeout() || e.is_connect() => Ok(false),
            Err(e) => Err(VisionError::RequestFailed(e.to_string())),
        }
    }

    fn endpoint(&self) -> &str {
        &self.config.base_url
    }
}
