//! PiGlance kiosk
//!
//! Tap-to-describe camera kiosk. Runs full screen on a console: each
//! Enter press freezes the preview, captures a photo, asks the describe
//! relay what is in it, then shows and speaks the answer.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use ai_speech::{EspeakProvider, SpeechEngine, SpeechError};
use application::{
    ports::{AnnouncerPort, CameraPort, DescribePort, ScreenPort},
    services::{
        CameraSession, CaptureWorkflow, CaptureWorkflowConfig, PermissionGate, PreviewOverlay,
        TapOutcome,
    },
};
use clap::Parser;
use infrastructure::{
    AnnouncerAdapter, AppConfig, ConsoleScreenAdapter, DescribeAdapter, KioskConfig,
    RpicamCameraAdapter,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// PiGlance kiosk
#[derive(Parser)]
#[command(name = "piglance")]
#[command(author, version, about = "Tap-to-describe camera kiosk", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Map the kiosk section of the config onto workflow behavior
const fn workflow_config(kiosk: &KioskConfig) -> CaptureWorkflowConfig {
    CaptureWorkflowConfig {
        ignore_tap_while_busy: kiosk.ignore_tap_while_busy,
    }
}

/// Run one tap end to end and log how it went
async fn run_tap(workflow: Arc<CaptureWorkflow>) {
    match workflow.handle_tap().await {
        Ok(TapOutcome::Completed(report)) => {
            info!(elapsed_ms = report.elapsed_ms, "✅ Capture described");
        }
        Ok(TapOutcome::Ignored) => {
            debug!("Tap ignored, a capture is already in flight");
        }
        Err(e) => {
            warn!("Tap failed: {e}");
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("👁️ PiGlance v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    // Fail on a bad endpoint now rather than on the first tap
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        relay = %config.vision.base_url,
        device = %config.camera.device,
        voice = %config.speech.voice,
        "Configuration loaded"
    );

    let camera: Arc<dyn CameraPort> = Arc::new(RpicamCameraAdapter::new(config.camera.clone()));
    let screen: Arc<dyn ScreenPort> = Arc::new(ConsoleScreenAdapter::new());

    // Without camera access there is nothing to show; the gate reports
    // and closes the screen on denial
    let gate = PermissionGate::new(Arc::clone(&camera), Arc::clone(&screen));
    if !gate.ensure_access().await?.is_granted() {
        info!("🚫 Camera access denied, exiting");
        return Ok(());
    }

    let session = CameraSession::new(Arc::clone(&camera), Arc::clone(&screen));
    session
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Camera failed to start: {e}"))?;

    // Speech is best-effort; a silent kiosk still shows text
    let speech_engine = Arc::new(EspeakProvider::new(config.speech.clone())?);
    if speech_engine.is_available().await {
        match speech_engine.probe_voice().await {
            Ok(()) => info!(voice = %config.speech.voice, "🗣️ Voice ready"),
            Err(SpeechError::VoiceNotFound(voice)) => {
                warn!(%voice, "🗣️ Language not supported");
            },
            Err(e) => warn!("Could not probe voices: {e}"),
        }
    } else {
        warn!("🔇 Speech synthesizer not found, results will be silent");
    }
    let announcer: Arc<dyn AnnouncerPort> = Arc::new(AnnouncerAdapter::new(
        Arc::clone(&speech_engine) as Arc<dyn SpeechEngine>,
    ));

    let describer: Arc<dyn DescribePort> =
        Arc::new(DescribeAdapter::from_config(config.vision.clone())?);
    if !describer.is_healthy().await {
        warn!(relay = %config.vision.base_url, "🔌 Describe relay not reachable yet");
    }

    let overlay = Arc::new(PreviewOverlay::new(
        Arc::clone(&camera),
        Arc::clone(&screen),
    ));
    let workflow = Arc::new(CaptureWorkflow::with_config(
        Arc::clone(&camera),
        Arc::clone(&screen),
        Arc::clone(&describer),
        Arc::clone(&announcer),
        Arc::clone(&overlay),
        workflow_config(&config.kiosk),
    ));

    println!("👆 Press Enter to describe the scene (Ctrl+C to quit)");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut taps = stdin.lines();

    loop {
        tokio::select! {
            line = taps.next_line() => match line {
                Ok(Some(_)) => {
                    // Each tap is its own task; the workflow's busy guard
                    // decides whether overlapping taps count
                    tokio::spawn(run_tap(Arc::clone(&workflow)));
                }
                Ok(None) => {
                    info!("📥 Input closed, shutting down...");
                    break;
                }
                Err(e) => {
                    warn!("Failed to read input: {e}");
                    break;
                }
            },
            _ = signal::ctrl_c() => {
                info!("📥 Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    // Teardown mirrors startup in reverse
    if let Err(e) = announcer.shutdown().await {
        warn!("Announcer shutdown failed: {e}");
    }
    if let Err(e) = session.shutdown().await {
        warn!("Camera shutdown failed: {e}");
    }
    if let Err(e) = screen.close().await {
        warn!("Screen close failed: {e}");
    }

    info!("👋 PiGlance shutdown complete");

    Ok(())
}
