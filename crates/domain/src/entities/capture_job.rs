//! Capture job entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{CaptureId, ImageFormat};

/// Processing status of a capture attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureJobStatus {
    /// Tap received, preview freezing
    Triggered,
    /// Photo capture requested from the camera
    Capturing,
    /// Still image produced, awaiting submission
    Captured,
    /// Image submitted to the describe endpoint
    Submitting,
    /// Description received and displayed
    Described,
    /// Capture or submission failed
    Failed,
}

impl CaptureJobStatus {
    /// Check if the status indicates completion
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Described | Self::Failed)
    }

    /// Check if the attempt is still in flight
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(
            self,
            Self::Triggered | Self::Capturing | Self::Captured | Self::Submitting
        )
    }
}

/// One tap-to-describe attempt from trigger to outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureJob {
    /// Unique identifier
    pub id: CaptureId,
    /// Current processing status
    pub status: CaptureJobStatus,
    /// Format of the captured still (once captured)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_format: Option<ImageFormat>,
    /// Size of the captured still in bytes (once captured)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size_bytes: Option<usize>,
    /// Description returned by the inference endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Error message if the attempt failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the tap arrived
    pub created_at: DateTime<Utc>,
    /// When the job was last updated
    pub updated_at: DateTime<Utc>,
}

impl CaptureJob {
    /// Create a new job for a fresh tap
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: CaptureId::new(),
            status: CaptureJobStatus::Triggered,
            image_format: None,
            image_size_bytes: None,
            description: None,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the photo capture as requested
    pub fn start_capture(&mut self) {
        self.status = CaptureJobStatus::Capturing;
        self.updated_at = Utc::now();
    }

    /// Record a successful capture
    pub fn complete_capture(&mut self, format: ImageFormat, size_bytes: usize) {
        self.image_format = Some(format);
        self.image_size_bytes = Some(size_bytes);
        self.status = CaptureJobStatus::Captured;
        self.updated_at = Utc::now();
    }

    /// Mark the image as submitted to the describe endpoint
    pub fn start_submission(&mut self) {
        self.status = CaptureJobStatus::Submitting;
        self.updated_at = Utc::now();
    }

    /// Record the returned description
    pub fn complete_submission(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
        self.status = CaptureJobStatus::Described;
        self.updated_at = Utc::now();
    }

    /// Mark as failed with error
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.status = CaptureJobStatus::Failed;
        self.error = Some(error.into());
        self.updated_at = Utc::now();
    }

    /// Get the description text if available
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Check if the attempt reached a terminal state
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.status.is_terminal()
    }
}

impl Default for CaptureJob {
    fn default() -> Self {
        Self::new()
    }
}
