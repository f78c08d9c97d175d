//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `camera`: Capture device and still command settings
//! - `kiosk`: Tap handling behavior
//! - `relay`: Describe relay server and its upstream model
//!
//! Vision and speech client settings come from their own crates
//! (`ai_vision::VisionConfig`, `ai_speech::SpeechConfig`).

mod camera;
mod kiosk;
mod relay;

use ai_speech::SpeechConfig;
use ai_vision::VisionConfig;
use serde::{Deserialize, Serialize};

pub use camera::CameraConfig;
pub use kiosk::KioskConfig;
pub use relay::RelayConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tap handling behavior
    #[serde(default)]
    pub kiosk: KioskConfig,

    /// Capture device configuration
    #[serde(default)]
    pub camera: CameraConfig,

    /// Describe relay client configuration
    #[serde(default)]
    pub vision: VisionConfig,

    /// Speech announcer configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Describe relay server configuration
    #[serde(default)]
    pub relay: RelayConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Priority (highest wins):
    /// 1. Environment variables (`PIGLANCE_` prefix)
    /// 2. `config.toml` in working directory
    /// 3. Built-in defaults
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` if parsing fails.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("relay.host", "127.0.0.1")?
            .set_default("relay.port", 5000)?
            .set_default("vision.base_url", "http://127.0.0.1:5000")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., PIGLANCE_RELAY_PORT)
            .add_source(
                config::Environment::with_prefix("PIGLANCE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate all sections
    ///
    /// Called once at startup so a bad endpoint or capture setting fails
    /// the process before the first tap.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.camera.validate()?;
        self.vision.validate()?;
        self.speech.validate()?;
        self.relay.validate()?;
        Ok(())
    }
}
