//! AI Speech - Text-to-Speech announcements
//!
//! Provides the trait and implementation for speaking results aloud:
//! - `SpeechEngine` - Speak short texts through the audio device
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - espeak-ng CLI (local, offline)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{EspeakProvider, SpeechConfig, SpeechEngine};
//!
//! let announcer = EspeakProvider::new(SpeechConfig::default())?;
//!
//! announcer.probe_voice().await?;
//! announcer.speak("a red apple on a table").await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::SpeechEngine;
pub use providers::espeak::EspeakProvider;
