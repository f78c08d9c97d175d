//! Capture device configuration.

use serde::{Deserialize, Serialize};

/// Capture device configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Video device node used for the access probe
    #[serde(default = "default_device")]
    pub device: String,

    /// Still capture command
    #[serde(default = "default_still_command")]
    pub still_command: String,

    /// Sensor warm-up time before a capture, in milliseconds
    #[serde(default = "default_warmup_ms")]
    pub warmup_ms: u64,

    /// Still photo width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Still photo height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Preview frame width in pixels
    #[serde(default = "default_preview_width")]
    pub preview_width: u32,

    /// Preview frame height in pixels
    #[serde(default = "default_preview_height")]
    pub preview_height: u32,
}

fn default_device() -> String {
    "/dev/video0".to_string()
}

fn default_still_command() -> String {
    "rpicam-still".to_string()
}

const fn default_warmup_ms() -> u64 {
    1000
}

// Pi camera v2 binned mode keeps the full field of view
const fn default_width() -> u32 {
    1640
}

const fn default_height() -> u32 {
    1232
}

const fn default_preview_width() -> u32 {
    320
}

const fn default_preview_height() -> u32 {
    240
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: default_device(),
            still_command: default_still_command(),
            warmup_ms: default_warmup_ms(),
            width: default_width(),
            height: default_height(),
            preview_width: default_preview_width(),
            preview_height: default_preview_height(),
        }
    }
}

impl CameraConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.device.trim().is_empty() {
            return Err("camera.device must not be empty".to_string());
        }

        if self.still_command.trim().is_empty() {
            return Err("camera.still_command must not be empty".to_string());
        }

        // rpicam-still treats a zero timeout as "run forever"
        if self.warmup_ms == 0 {
            return Err("camera.warmup_ms must be greater than zero".to_string());
        }

        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "camera still size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }

        if self.preview_width == 0 || self.preview_height == 0 {
            return Err(format!(
                "camera preview size must be non-zero, got {}x{}",
                self.preview_width, self.preview_height
            ));
        }

        Ok(())
    }
}
