//! Describe adapter - Implements DescribePort using ai_vision
//!
//! Works with any `DescribeEngine` backend:
//! - The piglance-relay service (default)
//! - A llama.cpp completion server spoken to directly

use std::sync::Arc;
use std::time::Instant;

use ai_vision::{DescribeEngine, DescribeRequest, RelayDescribeClient, VisionConfig, VisionError};
use application::{
    error::ApplicationError,
    ports::{DescribePort, Description},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for image description backends
pub struct DescribeAdapter {
    engine: Arc<dyn DescribeEngine>,
}

impl std::fmt::Debug for DescribeAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescribeAdapter")
            .field("endpoint", &self.engine.endpoint())
            .finish_non_exhaustive()
    }
}

impl DescribeAdapter {
    /// Create an adapter around any describe engine
    #[must_use]
    pub fn new(engine: Arc<dyn DescribeEngine>) -> Self {
        Self { engine }
    }

    /// Create an adapter talking to the describe relay
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: VisionConfig) -> Result<Self, ApplicationError> {
        let client = RelayDescribeClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Convert ai_vision error to application error
    fn map_error(e: VisionError) -> ApplicationError {
        match e {
            VisionError::ConnectionFailed(msg) => {
                ApplicationError::Inference(format!("Describe service unreachable: {msg}"))
            }
            VisionError::Timeout => {
                ApplicationError::Inference("Describe request timed out".to_string())
            }
            VisionError::Configuration(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl DescribePort for DescribeAdapter {
    #[instrument(skip(self, image_base64), fields(image_chars = image_base64.len()))]
    async fn describe(&self, image_base64: String) -> Result<Description, ApplicationError> {
        let start = Instant::now();

        let response = self
            .engine
            .describe(DescribeRequest::new(image_base64))
            .await
            .map_err(Self::map_error)?;

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;
        debug!(latency_ms, "Describe backend answered");

        Ok(Description {
            text: response.text,
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }
}
