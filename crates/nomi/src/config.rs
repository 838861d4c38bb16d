//! Process configuration: bearer token and API base URL.
//!
//! Resolved once in `main` and handed to commands through
//! [`crate::commands::Context`].

use std::fmt;

use nomi_client::{DEFAULT_BASE_URL, NomiClient};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "NOMI_API_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "NOMI_API_URL";

/// Errors that can occur while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No API key from the flag or the environment.
    #[error(
        "API key not found. Please set the {API_KEY_ENV} environment variable or use the -k flag"
    )]
    ApiKeyNotFound,
}

/// Resolved configuration.
#[derive(Clone)]
pub struct Config {
    /// Bearer token sent with every request.
    pub api_key: String,
    /// API origin, e.g. `https://api.nomi.ai/v1`.
    pub base_url: String,
}

impl Config {
    /// Resolve from the `--api-key` flag and the process environment.
    pub fn from_env(api_key: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(api_key, |name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    ///
    /// The flag wins over `NOMI_API_KEY`. Empty values count as unset.
    pub fn resolve<F>(api_key: Option<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        let api_key = non_empty(api_key)
            .or_else(|| non_empty(lookup(API_KEY_ENV)))
            .ok_or(ConfigError::ApiKeyNotFound)?;

        let base_url =
            non_empty(lookup(API_URL_ENV)).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    /// Build an API client from this configuration.
    pub fn client(&self) -> nomi_client::Result<NomiClient> {
        NomiClient::builder()
            .base_url(&self.base_url)
            .api_key(&self.api_key)
            .build()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
