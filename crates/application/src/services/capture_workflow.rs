//! Capture workflow - Orchestrates one tap-to-describe attempt
//!
//! This service orchestrates the complete capture flow:
//! 1. Freeze the preview behind a snapshot overlay
//! 2. Capture a still photo
//! 3. Base64-encode the image bytes
//! 4. Submit to the describe endpoint
//! 5. Display and speak the returned text
//! 6. Resume the live preview

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Instant,
};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use domain::entities::CaptureJob;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{AnnouncerPort, CameraPort, DescribePort, ScreenPort},
    services::PreviewOverlay,
};

/// Configuration for the capture workflow
#[derive(Debug, Clone)]
pub struct CaptureWorkflowConfig {
    /// Whether taps arriving while an attempt is in flight are ignored
    pub ignore_tap_while_busy: bool,
}

impl Default for CaptureWorkflowConfig {
    fn default() -> Self {
        Self {
            ignore_tap_while_busy: true,
        }
    }
}

/// Result of one completed capture attempt
#[derive(Debug)]
pub struct CaptureReport {
    /// The capture job with its final status
    pub job: CaptureJob,
    /// Description returned by the endpoint
    pub description: String,
    /// Total attempt time in milliseconds
    pub elapsed_ms: u64,
}

/// Outcome of one tap on the preview
#[derive(Debug)]
pub enum TapOutcome {
    /// Tap ignored because an attempt was already in flight
    Ignored,
    /// Attempt ran to a successful description
    Completed(CaptureReport),
}

/// Service orchestrating the tap-to-describe workflow
pub struct CaptureWorkflow {
    camera: Arc<dyn CameraPort>,
    screen: Arc<dyn ScreenPort>,
    describer: Arc<dyn DescribePort>,
    announcer: Arc<dyn AnnouncerPort>,
    overlay: Arc<PreviewOverlay>,
    config: CaptureWorkflowConfig,
    // In-flight marker for the busy guard. The overlay state cannot stand in
    // for this: a failed preview sample leaves the overlay live while the
    // attempt is still running.
    busy: AtomicBool,
}

impl fmt::Debug for CaptureWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureWorkflow")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CaptureWorkflow {
    /// Create a new capture workflow with default configuration
    pub fn new(
        camera: Arc<dyn CameraPort>,
        screen: Arc<dyn ScreenPort>,
        describer: Arc<dyn DescribePort>,
        announcer: Arc<dyn AnnouncerPort>,
        overlay: Arc<PreviewOverlay>,
    ) -> Self {
        Self::with_config(
            camera,
            screen,
            describer,
            announcer,
            overlay,
            CaptureWorkflowConfig::default(),
        )
    }

    /// Create a capture workflow with custom configuration
    pub fn with_config(
        camera: Arc<dyn CameraPort>,
        screen: Arc<dyn ScreenPort>,
        describer: Arc<dyn DescribePort>,
        announcer: Arc<dyn AnnouncerPort>,
        overlay: Arc<PreviewOverlay>,
        config: CaptureWorkflowConfig,
    ) -> Self {
        Self {
            camera,
            screen,
            describer,
            announcer,
            overlay,
            config,
            busy: AtomicBool::new(false),
        }
    }

    /// Handle one tap on the preview
    ///
    /// Single attempt, no retries. The in-flight slot is claimed atomically
    /// at entry and released only after resume, so taps racing in from other
    /// tasks are ignored for the whole attempt, including the stretch where a
    /// failed preview sample has left the overlay live. Within the attempt,
    /// freeze always precedes capture, and resume always follows the outcome
    /// regardless of which branch was taken: the preview must never stay
    /// frozen.
    #[instrument(skip(self))]
    pub async fn handle_tap(&self) -> Result<TapOutcome, ApplicationError> {
        if self.config.ignore_tap_while_busy
            && self
                .busy
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
        {
            debug!("Tap ignored, attempt already in flight");
            return Ok(TapOutcome::Ignored);
        }

        let start = Instant::now();
        let mut job = CaptureJob::new();

        info!(capture_id = %job.id, "Capture attempt started");
        self.overlay.freeze().await;

        let result = self.run_frozen(&mut job).await;

        // Guaranteed cleanup: the live preview comes back and the in-flight
        // slot frees on success and on every failure branch alike.
        self.overlay.resume().await;
        self.busy.store(false, Ordering::SeqCst);

        let description = result?;

        #[allow(clippy::cast_possible_truncation)]
        let elapsed_ms = start.elapsed().as_millis() as u64;

        info!(capture_id = %job.id, elapsed_ms, "Capture attempt complete");

        Ok(TapOutcome::Completed(CaptureReport {
            job,
            description,
            elapsed_ms,
        }))
    }

    /// Run capture, encode, submit, and display while the preview is frozen
    async fn run_frozen(&self, job: &mut CaptureJob) -> Result<String, ApplicationError> {
        job.start_capture();

        let image = match self.camera.capture_still().await {
            Ok(image) => image,
            Err(e) => {
                warn!(error = %e, "Photo capture failed");
                self.report_failure(job, format!("Photo capture failed: {e}"))
                    .await;
                return Err(e);
            },
        };

        let format = image.format();
        let size_bytes = image.size_bytes();
        job.complete_capture(format, size_bytes);
        debug!(size_bytes, format = %format, "Still image captured");

        // The buffer moves into the encoder here and is dropped as soon as
        // the base64 text exists.
        let image_base64 = STANDARD.encode(image.into_data());

        job.start_submission();

        let description = match self.describer.describe(image_base64).await {
            Ok(description) => description,
            Err(e) => {
                warn!(error = %e, "Describe request failed");
                self.report_failure(job, format!("Describe request failed: {e}"))
                    .await;
                return Err(e);
            },
        };

        debug!(latency_ms = description.latency_ms, "Description received");

        if let Err(e) = self.screen.set_result_text(description.text.clone()).await {
            warn!(error = %e, "Failed to update result text");
            self.report_failure(job, format!("Result display failed: {e}"))
                .await;
            return Err(e);
        }

        job.complete_submission(description.text.clone());

        if let Err(e) = self.announcer.announce(description.text.clone()).await {
            // Speech is best-effort; the attempt still counts as a success.
            warn!(error = %e, "Failed to speak description");
        }

        Ok(description.text)
    }

    /// Mark the job failed and surface a transient notice
    async fn report_failure(&self, job: &mut CaptureJob, message: String) {
        job.mark_failed(message.clone());
        if let Err(e) = self.screen.notify(message).await {
            warn!(error = %e, "Failed to show error notice");
        }
    }

    /// Get the current configuration
    #[must_use]
    pub const fn config(&self) -> &CaptureWorkflowConfig {
        &self.config
    }
}
