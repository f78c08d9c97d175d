//! Screen adapter - Implements ScreenPort on a text console
//!
//! The kiosk has no windowing system; screen state is held here and
//! mirrored to stdout so an attached terminal shows what a display
//! would.

use std::sync::atomic::{AtomicBool, Ordering};

use application::{error::ApplicationError, ports::ScreenPort};
use async_trait::async_trait;
use domain::value_objects::FrameSnapshot;
use parking_lot::Mutex;
use tracing::debug;

/// Console-backed screen adapter
#[derive(Debug, Default)]
pub struct ConsoleScreenAdapter {
    /// Tag of the overlay currently shown, if any
    overlay: Mutex<Option<String>>,
    /// Last result text shown
    result: Mutex<Option<String>>,
    closed: AtomicBool,
}

impl ConsoleScreenAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag of the overlay currently shown
    #[must_use]
    pub fn overlay_tag(&self) -> Option<String> {
        self.overlay.lock().clone()
    }

    /// The result text currently shown
    #[must_use]
    pub fn result_text(&self) -> Option<String> {
        self.result.lock().clone()
    }

    /// Whether the screen is still open
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.closed.load(Ordering::SeqCst)
    }

    #[allow(clippy::print_stdout)]
    fn render(&self, line: &str) {
        if self.is_open() {
            println!("{line}");
        } else {
            debug!("Screen already closed, dropping: {line}");
        }
    }
}

#[async_trait]
impl ScreenPort for ConsoleScreenAdapter {
    async fn show_overlay(
        &self,
        tag: String,
        snapshot: FrameSnapshot,
    ) -> Result<(), ApplicationError> {
        self.render(&format!(
            "[preview] frozen {}x{} (tag: {tag})",
            snapshot.width(),
            snapshot.height()
        ));
        *self.overlay.lock() = Some(tag);
        Ok(())
    }

    async fn remove_overlay(&self, tag: String) -> Result<bool, ApplicationError> {
        let mut slot = self.overlay.lock();
        if slot.as_deref() == Some(tag.as_str()) {
            *slot = None;
            drop(slot);
            self.render("[preview] live");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn set_result_text(&self, text: String) -> Result<(), ApplicationError> {
        self.render(&format!("[result] {text}"));
        *self.result.lock() = Some(text);
        Ok(())
    }

    async fn notify(&self, message: String) -> Result<(), ApplicationError> {
        self.render(&format!("[notice] {message}"));
        Ok(())
    }

    async fn close(&self) -> Result<(), ApplicationError> {
        self.render("[screen] closed");
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
