//! HTTP client for the describe relay

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    config::VisionConfig,
    error::VisionError,
    ports::{DescribeEngine, DescribeRequest, DescribeResponse},
};

/// Wire request accepted by the relay
#[derive(Debug, Serialize)]
struct RelayRequest {
    image: String,
}

/// Wire response produced by the relay
#[derive(Debug, Deserialize)]
struct RelayResponse {
    result: String,
}

/// Client for the describe relay service
#[derive(Debug)]
pub struct RelayDescribeClient {
    client: reqwest::Client,
    config: VisionConfig,
}

impl RelayDescribeClient {
    /// Create a new relay client
    pub fn new(config: VisionConfig) -> Result<Self, VisionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| VisionError::ConnectionFailed(e.to_string()))?;

        info!(base_url = %config.base_url, "Describe relay client initialized");

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
impl DescribeEngine for RelayDescribeClient {
    async fn describe(&self, request: DescribeRequest) -> Result<DescribeResponse, VisionError> {
        let url = self.api_url("describe");
        debug!(url = %url, image_chars = request.image_base64.len(), "Sending describe request");

        let body = RelayRequest {
            image: request.image_base64,
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Describe relay returned an error");
            return Err(VisionError::ServerError(format!(
                "Status {status}: {text}"
            )));
        }

        let relay_response: RelayResponse = response
            .json()
            .await
            .map_err(|e| VisionError::InvalidResponse(e.to_string()))?;

        debug!(
            result_chars = relay_response.result.len(),
            "Describe request completed"
        );

        Ok(DescribeResponse {
            text: relay_response.result,
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
