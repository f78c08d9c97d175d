//! Configuration for image description engines

use serde::{Deserialize, Serialize};

/// Configuration for the describe relay client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Base URL of the describe relay
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    ///
    /// The exchange has no timeout policy of its own; leave unset to wait as
    /// long as the server takes.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

impl VisionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        validate_http_url("vision.base_url", &self.base_url)
    }
}

/// Configuration for the LLaVA completion client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlavaConfig {
    /// Base URL of the llama.cpp completion server
    #[serde(default = "default_llava_base_url")]
    pub base_url: String,

    /// Captioning prompt sent with every image
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Maximum tokens to generate
    #[serde(default = "default_n_predict")]
    pub n_predict: u32,

    /// Identifier linking the prompt's image slot to the payload
    #[serde(default = "default_image_id")]
    pub image_id: u32,

    /// Request timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_llava_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_prompt() -> String {
    "USER:[img-12]Describe the image briefly and accurately.\nASSISTANT:".to_string()
}

const fn default_n_predict() -> u32 {
    128
}

const fn default_image_id() -> u32 {
    12
}

impl Default for LlavaConfig {
    fn default() -> Self {
        Self {
            base_url: default_llava_base_url(),
            prompt: default_prompt(),
            n_predict: default_n_predict(),
            image_id: default_image_id(),
            timeout_ms: None,
        }
    }
}

impl LlavaConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        validate_http_url("llava.base_url", &self.base_url)?;

        if self.prompt.trim().is_empty() {
            return Err("llava.prompt must not be empty".to_string());
        }

        if self.n_predict == 0 {
            return Err("llava.n_predict must be greater than zero".to_string());
        }

        Ok(())
    }
}

/// Check that a configured URL is plausibly reachable over HTTP
fn validate_http_url(field: &str, url: &str) -> Result<(), String> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| format!("{field} must start with http:// or https://, got '{url}'"))?;

    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() {
        return Err(format!("{field} is missing a host: '{url}'"));
    }

    Ok(())
}
