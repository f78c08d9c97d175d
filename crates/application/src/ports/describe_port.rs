//! Describe port - Interface for the remote image description endpoint

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a describe request
#[derive(Debug, Clone)]
pub struct Description {
    /// Text returned by the endpoint, verbatim
    pub text: String,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Port for submitting captured images for description
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DescribePort: Send + Sync {
    /// Submit a base64-encoded image and await its description
    ///
    /// One request, one response. No retry, no cancellation.
    async fn describe(&self, image_base64: String) -> Result<Description, ApplicationError>;

    /// Check if the endpoint is reachable
    async fn is_healthy(&self) -> bool;
}
