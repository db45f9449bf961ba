//! Console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ISMARTPAY_API_URL` - Base URL of the iSmartPay admin REST service
//!
//! ## Optional
//! - `ISMARTPAY_HTTP_TIMEOUT_SECS` - Transport timeout in seconds (default: 30)
//! - `ISMARTPAY_SESSION_FILE` - Path of the persisted session file (CLI only)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_HTTP_TIMEOUT_SECS: &str = "30";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Console client configuration.
///
/// Credentials are never part of the configuration; they are per-call
/// inputs to `login`.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the remote REST service.
    pub api_url: Url,
    /// Transport timeout applied to every request.
    pub http_timeout: Duration,
    /// Override for the persisted session file location.
    pub session_file: Option<PathBuf>,
}

impl ConsoleConfig {
    /// Build a configuration programmatically (tests, embedding).
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            http_timeout: Duration::from_secs(30),
            session_file: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_required_env("ISMARTPAY_API_URL")?;
        let api_url = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("ISMARTPAY_API_URL".to_string(), e.to_string()))?;

        let timeout_secs = get_env_or_default("ISMARTPAY_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ISMARTPAY_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        let session_file = get_optional_env("ISMARTPAY_SESSION_FILE").map(PathBuf::from);

        Ok(Self {
            api_url,
            http_timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }

    /// The base URL as a string with no trailing slash, ready for path
    /// concatenation.
    #[must_use]
    pub fn api_base(&self) -> String {
        self.api_url.as_str().trim_end_matches('/').to_string()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_trims_trailing_slash() {
        let config = ConsoleConfig::new(Url::parse("https://api.ismartpay.test/").expect("url"));
        assert_eq!(config.api_base(), "https://api.ismartpay.test");
    }

    #[test]
    fn test_api_base_keeps_path_prefix() {
        let config =
            ConsoleConfig::new(Url::parse("https://gateway.test/ismartpay/").expect("url"));
        assert_eq!(config.api_base(), "https://gateway.test/ismartpay");
    }

    #[test]
    fn test_new_defaults() {
        let config = ConsoleConfig::new(Url::parse("http://127.0.0.1:9000").expect("url"));
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.session_file.is_none());
    }
}
