//! Camera adapter - Implements CameraPort using the rpicam-apps CLI
//!
//! Works with the stock Raspberry Pi OS capture stack:
//! - `rpicam-still` (Bookworm and later)
//! - `libcamera-still` (older releases, set `camera.still_command`)

use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};

use application::{
    error::ApplicationError,
    ports::{CameraAccess, CameraPort},
};
use async_trait::async_trait;
use domain::value_objects::{FrameSnapshot, ImageFormat, StillImage};
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

use crate::config::CameraConfig;

/// Adapter for rpicam-apps still capture
#[derive(Debug)]
pub struct RpicamCameraAdapter {
    config: CameraConfig,
    bound: AtomicBool,
}

impl RpicamCameraAdapter {
    /// Create a new adapter with the given configuration
    #[must_use]
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            bound: AtomicBool::new(false),
        }
    }

    /// Build the still command arguments for one capture
    fn build_args(&self, width: u32, height: u32, encoding: &str) -> Vec<String> {
        vec![
            "-n".to_string(),
            "-t".to_string(),
            self.config.warmup_ms.to_string(),
            "--width".to_string(),
            width.to_string(),
            "--height".to_string(),
            height.to_string(),
            "--encoding".to_string(),
            encoding.to_string(),
            "-o".to_string(),
            "-".to_string(),
        ]
    }

    /// Run the still command and return its stdout bytes
    async fn run_still(
        &self,
        width: u32,
        height: u32,
        encoding: &str,
    ) -> Result<Vec<u8>, ApplicationError> {
        let args = self.build_args(width, height, encoding);
        debug!(command = %self.config.still_command, ?args, "Running capture command");

        let output = Command::new(&self.config.still_command)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.command_error(&e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "Capture command failed");
            return Err(ApplicationError::Camera(format!(
                "Capture command exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        if output.stdout.is_empty() {
            return Err(ApplicationError::Camera(
                "Capture command produced no image data".to_string(),
            ));
        }

        Ok(output.stdout)
    }

    /// Map a spawn failure to a camera error
    fn command_error(&self, e: &std::io::Error) -> ApplicationError {
        if e.kind() == std::io::ErrorKind::NotFound {
            ApplicationError::Camera(format!(
                "'{}' not found. Please install rpicam-apps.",
                self.config.still_command
            ))
        } else {
            ApplicationError::Camera(format!("Failed to run capture command: {e}"))
        }
    }

    fn ensure_bound(&self) -> Result<(), ApplicationError> {
        if self.bound.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ApplicationError::InvalidOperation(
                "Camera is not bound".to_string(),
            ))
        }
    }
}

#[async_trait]
impl CameraPort for RpicamCameraAdapter {
    async fn check_access(&self) -> Result<CameraAccess, ApplicationError> {
        match tokio::fs::File::open(&self.config.device).await {
            Ok(_) => Ok(CameraAccess::Granted),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                debug!(device = %self.config.device, "Camera device access denied");
                Ok(CameraAccess::Denied)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ApplicationError::Camera(
                format!("Camera device '{}' not found", self.config.device),
            )),
            Err(e) => Err(ApplicationError::Camera(format!(
                "Failed to probe camera device '{}': {e}",
                self.config.device
            ))),
        }
    }

    async fn request_access(&self) -> Result<CameraAccess, ApplicationError> {
        // No runtime permission dialog on Linux; the fix is group membership
        info!(
            device = %self.config.device,
            "Camera access denied; add the user to the 'video' group and retry"
        );
        self.check_access().await
    }

    #[instrument(skip(self))]
    async fn bind(&self) -> Result<(), ApplicationError> {
        // Confirm the capture command is installed
        let probe = Command::new(&self.config.still_command)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| self.command_error(&e))?;

        if !probe.success() {
            return Err(ApplicationError::Camera(format!(
                "'{}' version probe exited with status {}",
                self.config.still_command, probe
            )));
        }

        // Confirm the device node is there
        tokio::fs::metadata(&self.config.device)
            .await
            .map_err(|e| {
                ApplicationError::Camera(format!(
                    "Camera device '{}' unavailable: {e}",
                    self.config.device
                ))
            })?;

        self.bound.store(true, Ordering::SeqCst);
        info!(device = %self.config.device, "Camera bound");
        Ok(())
    }

    async fn sample_preview(&self) -> Result<FrameSnapshot, ApplicationError> {
        self.ensure_bound()?;

        let width = self.config.preview_width;
        let height = self.config.preview_height;
        let pixels = self.run_still(width, height, "rgb").await?;

        Ok(FrameSnapshot::new(width, height, pixels)?)
    }

    #[instrument(skip(self))]
    async fn capture_still(&self) -> Result<StillImage, ApplicationError> {
        self.ensure_bound()?;

        let bytes = self
            .run_still(self.config.width, self.config.height, "jpg")
            .await?;

        debug!(size_bytes = bytes.len(), "Captured still photo");

        Ok(StillImage::new(bytes, ImageFormat::Jpeg)?)
    }

    async fn shutdown(&self) -> Result<(), ApplicationError> {
        self.bound.store(false, Ordering::SeqCst);
        debug!("Camera released");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_fake_device(device: &str) -> CameraConfig {
        CameraConfig {
            device: device.to_string(),
            still_command: "/nonexistent/rpicam-still".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn check_access_grants_on_readable_device() {
        let device = tempfile::NamedTempFile::new().unwrap();
        let adapter =
            RpicamCameraAdapter::new(config_with_fake_device(&device.path().to_string_lossy()));

        let access = adapter.check_access().await.unwrap();
        assert!(access.is_granted());
    }

    #[tokio::test]
    async fn check_access_errors_on_missing_device() {
        let adapter = RpicamCameraAdapter::new(config_with_fake_device("/nonexistent/video99"));

        let result = adapter.check_access().await;
        assert!(matches!(result, Err(ApplicationError::Camera(_))));
    }

    #[tokio::test]
    async fn bind_fails_without_capture_command() {
        let device = tempfile::NamedTempFile::new().unwrap();
        let adapter =
            RpicamCameraAdapter::new(config_with_fake_device(&device.path().to_string_lossy()));

        let result = adapter.bind().await;
        match result {
            Err(ApplicationError::Camera(msg)) => {
                assert!(msg.contains("rpicam-still"), "unexpected message: {msg}");
            }
            other => panic!("expected Camera error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn capture_requires_bind() {
        let adapter = RpicamCameraAdapter::new(CameraConfig::default());

        let result = adapter.capture_still().await;
        assert!(matches!(result, Err(ApplicationError::InvalidOperation(_))));
    }

    #[tokio::test]
    async fn preview_requires_bind() {
        let adapter = RpicamCameraAdapter::new(CameraConfig::default());

        let result = adapter.sample_preview().await;
        assert!(matches!(result, Err(ApplicationError::InvalidOperation(_))));
    }

    #[tokio::test]
    async fn shutdown_clears_binding() {
        let adapter = RpicamCameraAdapter::new(CameraConfig::default());
        adapter.bound.store(true, Ordering::SeqCst);

        adapter.shutdown().await.unwrap();

        let result = adapter.capture_still().await;
        assert!(matches!(result, Err(ApplicationError::InvalidOperation(_))));
    }

    #[test]
    fn still_args_request_stdout_output() {
        let adapter = RpicamCameraAdapter::new(CameraConfig::default());
        let args = adapter.build_args(1640, 1232, "jpg");

        assert!(args.contains(&"-n".to_string()));
        assert!(args.contains(&"--encoding".to_string()));
        assert!(args.contains(&"jpg".to_string()));
        assert_eq!(args.last(), Some(&"-".to_string()));
    }
}
