//! Local speech announcer using espeak-ng
//!
//! Implements `SpeechEngine` by piping text to the espeak-ng CLI, which
//! plays straight to the default audio device.
//!
//! # Prerequisites
//!
//! - espeak-ng must be installed and available in PATH
//!
//! # Installation on Raspberry Pi
//!
//! ```bash
//! sudo apt install espeak-ng
//! ```

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::SpeechEngine;

/// Local announcer using the espeak-ng CLI
#[derive(Debug)]
pub struct EspeakProvider {
    config: SpeechConfig,
    /// The announcement currently playing, if any
    current: Mutex<Option<Child>>,
}

impl EspeakProvider {
    /// Create a new espeak-ng provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;
        Ok(Self {
            config,
            current: Mutex::new(None),
        })
    }

    /// Kill the announcement held in the slot, if any
    async fn interrupt(slot: &mut Option<Child>) {
        if let Some(mut child) = slot.take() {
            match child.kill().await {
                Ok(()) => debug!("Interrupted previous announcement"),
                Err(e) => debug!("Previous announcement already finished: {e}"),
            }
        }
    }

    /// Map a spawn failure to a speech error
    fn spawn_error(&self, e: &std::io::Error) -> SpeechError {
        if e.kind() == std::io::ErrorKind::NotFound {
            SpeechError::NotAvailable(format!(
                "'{}' not found. Please install espeak-ng.",
                self.config.executable
            ))
        } else {
            SpeechError::SynthesisFailed(format!("Failed to run synthesizer: {e}"))
        }
    }

    /// Decide the probe outcome from a `--voices` listing
    fn probe_outcome(&self, listing: &str) -> Result<(), SpeechError> {
        if voice_listed(listing, &self.config.voice) {
            Ok(())
        } else {
            Err(SpeechError::VoiceNotFound(self.config.voice.clone()))
        }
    }
}

/// Check whether a voice identifier appears in `--voices` output
///
/// Matches against any column of the listing so both language codes
/// ("en-us") and voice names work.
fn voice_listed(output: &str, voice: &str) -> bool {
    output
        .lines()
        .skip(1)
        .flat_map(str::split_whitespace)
        .any(|token| token.eq_ignore_ascii_case(voice))
}

#[async_trait]
impl SpeechEngine for EspeakProvider {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Cannot announce empty text".to_string(),
            ));
        }

        let mut slot = self.current.lock().await;

        // A new announcement always flushes the previous one
        Self::interrupt(&mut slot).await;

        let mut cmd = Command::new(&self.config.executable);
        cmd.arg("-v")
            .arg(&self.config.voice)
            .arg("-s")
            .arg(self.config.rate_wpm.to_string())
            .arg("-a")
            .arg(self.config.amplitude.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        debug!("Running synthesizer: {:?}", cmd);

        let mut child = cmd.spawn().map_err(|e| self.spawn_error(&e))?;

        // Hand the text over and close stdin so playback starts
        if let Some(mut stdin) = child.stdin.take() {
            use tokio::io::AsyncWriteExt;
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                if let Err(kill_err) = child.kill().await {
                    debug!("Failed to stop synthesizer after stdin error: {kill_err}");
                }
                return Err(SpeechError::SynthesisFailed(format!(
                    "Failed to write to synthesizer stdin: {e}"
                )));
            }
        }

        // Playback runs in the background; do not wait for it
        *slot = Some(child);

        Ok(())
    }

    async fn stop(&self) -> Result<(), SpeechError> {
        let mut slot = self.current.lock().await;
        Self::interrupt(&mut slot).await;
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), SpeechError> {
        self.stop().await?;
        debug!("Speech announcer shut down");
        Ok(())
    }

    async fn probe_voice(&self) -> Result<(), SpeechError> {
        let output = Command::new(&self.config.executable)
            .arg("--voices")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(&e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("Voice listing failed: {}", stderr.trim());
            return Err(SpeechError::NotAvailable(format!(
                "Voice listing exited with status {}",
                output.status
            )));
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        self.probe_outcome(&listing)
    }

    async fn is_available(&self) -> bool {
        Command::new(&self.config.executable)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn voice(&self) -> &str {
        &self.config.voice
    }
}
