//! Configuration for speech announcements

use serde::{Deserialize, Serialize};

/// Configuration for the speech announcer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Synthesizer executable name or path
    #[serde(default = "default_executable")]
    pub executable: String,

    /// Voice identifier passed to the synthesizer
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Speaking rate in words per minute
    #[serde(default = "default_rate_wpm")]
    pub rate_wpm: u32,

    /// Output amplitude, 0 to 200
    #[serde(default = "default_amplitude")]
    pub amplitude: u32,
}

fn default_executable() -> String {
    "espeak-ng".to_string()
}

fn default_voice() -> String {
    "en-us".to_string()
}

const fn default_rate_wpm() -> u32 {
    175
}

const fn default_amplitude() -> u32 {
    100
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            voice: default_voice(),
            rate_wpm: default_rate_wpm(),
            amplitude: default_amplitude(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.executable.trim().is_empty() {
            return Err("speech.executable must not be empty".to_string());
        }

        if self.voice.trim().is_empty() {
            return Err("speech.voice must not be empty".to_string());
        }

        // espeak-ng accepts 80 to 450 words per minute
        if !(80..=450).contains(&self.rate_wpm) {
            return Err(format!(
                "speech.rate_wpm must be between 80 and 450, got {}",
                self.rate_wpm
            ));
        }

        if self.amplitude > 200 {
            return Err(format!(
                "speech.amplitude must be at most 200, got {}",
                self.amplitude
            ));
        }

        Ok(())
    }
}
