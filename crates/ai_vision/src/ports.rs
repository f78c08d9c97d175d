//! Engine abstraction for image description backends

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::VisionError;

/// A description request carrying one base64-encoded image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeRequest {
    /// Base64-encoded image bytes (standard alphabet, unwrapped)
    pub image_base64: String,
}

impl DescribeRequest {
    #[must_use]
    pub fn new(image_base64: impl Into<String>) -> Self {
        Self {
            image_base64: image_base64.into(),
        }
    }
}

/// The backend's answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeResponse {
    /// Description text, verbatim from the backend
    pub text: String,
}

/// A backend that turns an image into a short text description
#[async_trait]
pub trait DescribeEngine: Send + Sync {
    /// Describe a single image
    async fn describe(&self, request: DescribeRequest) -> Result<DescribeResponse, VisionError>;

    /// Check whether the backend is reachable and answering
    async fn health_check(&self) -> Result<bool, VisionError>;

    /// The endpoint this engine talks to
    fn endpoint(&self) -> &str;
}
