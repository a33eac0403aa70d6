//! Configuration management for lmsieve
//!
//! Settings are loaded from environment variables with the defaults the
//! tool was written against (a stock LM Studio install on localhost).
//!
//! # Environment Variables
//!
//! - `LMSIEVE_HOST`: Server base URL - default: "http://127.0.0.1:1234/v1"
//! - `LMSIEVE_MODEL`: Model identifier - default: "phi-3.1-mini-128k-instruct"
//! - `LMSIEVE_REQUEST_TIMEOUT`: Completion timeout in seconds - default: "30"
//! - `LMSIEVE_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use lmsieve::config::SieveConfig;
//!
//! let config = SieveConfig::default();
//! config.validate().expect("Invalid configuration");
//!
//! let probe = config.create_probe();
//! let backend = config.create_backend();
//! ```

use crate::api::CompletionClient;
use crate::probe::ServerProbe;
use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Default values for configuration
const DEFAULT_HOST: &str = "http://127.0.0.1:1234/v1";
const DEFAULT_MODEL: &str = "phi-3.1-mini-128k-instruct";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse a configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Main configuration structure for lmsieve
///
/// Construct with `Default::default()` to load from environment variables
/// with fallback defaults, then override fields as needed (the CLI layer
/// does this for its flags).
#[derive(Debug, Clone)]
pub struct SieveConfig {
    /// Server base URL
    pub host: String,

    /// Model identifier to probe for and to query
    pub model: String,

    /// Completion request timeout in seconds (the probe uses its own,
    /// shorter timeout)
    pub request_timeout_secs: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for SieveConfig {
    fn default() -> Self {
        let request_timeout_secs = match env::var("LMSIEVE_REQUEST_TIMEOUT") {
            Ok(raw) => raw.parse::<u64>().unwrap_or_else(|e| {
                warn!(
                    "Invalid LMSIEVE_REQUEST_TIMEOUT '{}' ({}), using default {}",
                    raw, e, DEFAULT_REQUEST_TIMEOUT_SECS
                );
                DEFAULT_REQUEST_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Self {
            host: env::var("LMSIEVE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            model: env::var("LMSIEVE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            request_timeout_secs,
            log_level: env::var("LMSIEVE_LOG_LEVEL")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl SieveConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationFailed`] for an empty or non-HTTP
    /// host, an empty model name, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "host must not be empty".to_string(),
            ));
        }

        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(ConfigError::ValidationFailed(format!(
                "host '{}' must start with http:// or https://",
                self.host
            )));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "model must not be empty".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Creates an availability prober for the configured host
    pub fn create_probe(&self) -> ServerProbe {
        ServerProbe::new(self.host.clone())
    }

    /// Creates a completion client for the configured host and model
    pub fn create_backend(&self) -> CompletionClient {
        CompletionClient::with_timeout(
            self.host.clone(),
            self.model.clone(),
            Duration::from_secs(self.request_timeout_secs),
        )
    }
}

impl fmt::Display for SieveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SieveConfig {{ host: {}, model: {}, timeout: {}s }}",
            self.host, self.model, self.request_timeout_secs
        )
    }
}
