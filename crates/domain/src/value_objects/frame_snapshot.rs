//! Frame snapshot value object
//!
//! An immutable copy of the live preview at freeze time. Created when the
//! overlay freezes, owned by the overlay while frozen, discarded on resume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A still copy of one preview frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    captured_at: DateTime<Utc>,
}

impl FrameSnapshot {
    /// Create a snapshot, validating dimensions and pixel data
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidFrame(format!(
                "Snapshot dimensions must be non-zero, got {width}x{height}"
            )));
        }

        if pixels.is_empty() {
            return Err(DomainError::InvalidFrame(
                "Snapshot pixel buffer is empty".to_string(),
            ));
        }

        Ok(Self {
            width,
            height,
            pixels,
            captured_at: Utc::now(),
        })
    }

    /// Frame width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel data
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Size of the pixel buffer in bytes
    pub fn size_bytes(&self) -> usize {
        self.pixels.len()
    }

    /// When the frame was sampled from the preview
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}
