//! Server configuration.

use serde::Deserialize;

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Seconds between the `/down` acknowledgment and process exit.
    #[serde(default = "default_crash_delay_secs")]
    pub crash_delay_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_crash_delay_secs() -> u64 {
    2
}

impl ApiConfig {
    /// Load config from environment variables (FIREDRILL_PORT).
    pub fn from_env() -> Self {
        let port = std::env::var("FIREDRILL_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_port);
        Self {
            port,
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            crash_delay_secs: default_crash_delay_secs(),
        }
    }
}
