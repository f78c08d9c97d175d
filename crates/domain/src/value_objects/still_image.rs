//! Captured still image value object
//!
//! The encoded byte buffer produced by one photo capture. Transient: it lives
//! for a single encode-and-submit operation and is consumed when the bytes are
//! handed to the encoder.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Container format of a captured still
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG encoding (camera default)
    Jpeg,
    /// PNG encoding
    Png,
}

impl ImageFormat {
    /// Get the MIME type for this format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// Parse from MIME type
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let base = mime.split(';').next().unwrap_or(mime).trim();
        match base {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// One captured photo as an encoded byte buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StillImage {
    data: Vec<u8>,
    format: ImageFormat,
}

impl StillImage {
    /// Create a still image, rejecting empty buffers
    pub fn new(data: Vec<u8>, format: ImageFormat) -> Result<Self, DomainError> {
        if data.is_empty() {
            return Err(DomainError::InvalidImage(
                "Captured image buffer is empty".to_string(),
            ));
        }

        Ok(Self { data, format })
    }

    /// Container format of the image
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// Size of the encoded buffer in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Consume the image, releasing its byte buffer to the caller
    ///
    /// After this call the image no longer exists; the buffer belongs to the
    /// encoder and is dropped when encoding finishes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
