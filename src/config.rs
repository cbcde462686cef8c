//! Configuration loading and constants.
//!
//! Loads gateway configuration from a TOML file. `GatewayConfig` is the root
//! configuration struct: TLS credential paths, the two listener ports, and
//! the static content directory.

use serde::Deserialize;
use std::path::Path;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "portico=debug,tower_http=debug";

/// Directory served by the static responder when none is configured
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Document served for request paths that match no file
pub const DEFAULT_FALLBACK_DOCUMENT: &str = "index.html";

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// TLS credential paths
    pub tls: TlsConfig,
    /// Secure (HTTPS) listener port
    pub listening_port: u16,
    /// Plaintext listener port; requests here are always redirected
    pub listening_redirect_port: u16,
    /// Directory containing the static assets to serve
    #[serde(default = "GatewayConfig::default_public_dir")]
    pub public_dir: String,
    /// File under `public_dir` served for unmatched paths
    #[serde(default = "GatewayConfig::default_fallback_document")]
    pub fallback_document: String,
}

/// TLS credential file paths
#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    /// Path to the PEM certificate file
    pub cert: String,
    /// Path to the PEM private key file
    pub key: String,
}

impl GatewayConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GatewayConfig = toml::from_str(&contents)?;

        if config.listening_port == config.listening_redirect_port {
            return Err(ConfigError::Validation(format!(
                "listening_port and listening_redirect_port must differ (both are {})",
                config.listening_port
            )));
        }

        Ok(config)
    }

    fn default_public_dir() -> String {
        DEFAULT_PUBLIC_DIR.to_string()
    }

    fn default_fallback_document() -> String {
        DEFAULT_FALLBACK_DOCUMENT.to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
