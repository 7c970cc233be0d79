//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Default swap adapter request timeout in seconds.
pub const DEFAULT_SWAP_API_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the swap aggregator (quotes are disabled when unset).
    pub swap_api_url: Option<String>,
    /// Bearer token for the swap aggregator.
    pub swap_api_key: Option<String>,
    /// Timeout for swap aggregator requests.
    pub swap_api_timeout: Duration,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            swap_api_url: None,
            swap_api_key: None,
            swap_api_timeout: Duration::from_secs(DEFAULT_SWAP_API_TIMEOUT_SECS),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SWAP_API_URL`: Swap aggregator base URL
    /// - `SWAP_API_KEY`: Swap aggregator bearer token
    /// - `SWAP_API_TIMEOUT_SECS`: Request timeout (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let swap_api_url = non_empty_var("SWAP_API_URL");
        if let Some(url) = &swap_api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::Config(format!(
                    "SWAP_API_URL must be an http(s) URL, got '{}'",
                    url
                )));
            }
        }

        let swap_api_timeout = match non_empty_var("SWAP_API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    AppError::Config(format!("Invalid SWAP_API_TIMEOUT_SECS '{}': {}", raw, e))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_SWAP_API_TIMEOUT_SECS),
        };

        let swap_api_key = non_empty_var("SWAP_API_KEY");
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self { swap_api_url, swap_api_key, swap_api_timeout, log_level })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
