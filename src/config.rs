//! Environment-derived configuration

use thiserror::Error;

/// Default API host for chat completions
const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PERPLEXITY_API_KEY is not set; export it before starting")]
    MissingApiKey,
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// The API key is required. The base URL may be overridden via
    /// `PERPLEXITY_BASE_URL` for gateways or local test servers.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("PERPLEXITY_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = std::env::var("PERPLEXITY_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}
