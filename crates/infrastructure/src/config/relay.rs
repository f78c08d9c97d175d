//! Describe relay server configuration.

use ai_vision::LlavaConfig;
use serde::{Deserialize, Serialize};

/// Describe relay server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum request body size in bytes (default: 10MB)
    ///
    /// Base64-encoded stills from the kiosk arrive in one JSON body.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Upstream completion server settings
    #[serde(default)]
    pub llava: LlavaConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

const fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024 // 10MB
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            llava: LlavaConfig::default(),
        }
    }
}

impl RelayConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("relay.host must not be empty".to_string());
        }

        if self.max_body_bytes == 0 {
            return Err("relay.max_body_bytes must be greater than zero".to_string());
        }

        self.llava.validate()
    }

    /// The socket address string to bind to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(RelayConfig::default().validate().is_ok());
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = RelayConfig {
            host: "0.0.0.0".to_string(),
            port: 8088,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8088");
    }

    #[test]
    fn invalid_upstream_fails_validation() {
        let config = RelayConfig {
            llava: LlavaConfig {
                base_url: "nonsense".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
