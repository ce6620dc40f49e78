// Backend connection settings

use std::env;
use std::fmt;

/// Production backend used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://ten-be.koyeb.app";

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "TEN_API_BASE_URL";

/// Environment variable holding the backend API key
pub const API_KEY_ENV: &str = "TEN_API_KEY";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    #[error("API key is not configured (set TEN_API_KEY)")]
    MissingApiKey,
}

/// Backend base URL and API key.
///
/// Built once at startup and handed to the client. Fields are private so the
/// values cannot change after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
}

impl ApiConfig {
    /// Create a configuration from explicit values
    ///
    /// The base URL is kept verbatim; endpoints are appended to it as-is.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let api_key = api_key.into();

        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self { base_url, api_key })
    }

    /// Resolve the configuration from `TEN_API_BASE_URL` and `TEN_API_KEY`
    ///
    /// A missing or blank base URL falls back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = env::var(API_KEY_ENV).map_err(|_| ConfigError::MissingApiKey)?;

        Self::new(base_url, api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_base_url_verbatim() {
        let config = ApiConfig::new("http://localhost:8000/", "secret").unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000/");
        assert_eq!(config.api_key(), "secret");
    }

    #[test]
    fn test_new_rejects_blank_values() {
        assert_eq!(ApiConfig::new("  ", "secret"), Err(ConfigError::EmptyBaseUrl));
        assert_eq!(
            ApiConfig::new("http://localhost:8000", ""),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ApiConfig::new("http://localhost:8000", "top-secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("http://localhost:8000"));
        assert!(!debug.contains("top-secret"));
    }
}
