//! Configuration for the upstream resolution provider.

use instafetch_error::ConfigError;

/// Default RapidAPI resolution endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://instagram-downloader-download-instagram-stories-videos4.p.rapidapi.com/convert";

/// Configuration for the upstream resolution provider.
///
/// Constructed once at startup and passed into [`crate::ProviderClient`];
/// the resolution path never reads the environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderConfig {
    /// Provider endpoint URL
    pub endpoint: String,
    /// Credential key sent as the `x-rapidapi-key` header
    pub api_key: String,
    /// Provider host identifier sent as the `x-rapidapi-host` header
    pub api_host: String,
}

impl ProviderConfig {
    /// Create a new provider configuration against the default endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use instafetch_provider::{ProviderConfig, DEFAULT_ENDPOINT};
    ///
    /// let config = ProviderConfig::new("key", "host.p.rapidapi.com");
    /// assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    /// ```
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            api_host: api_host.into(),
        }
    }

    /// Create config from environment variables, validated eagerly so a
    /// missing credential fails at startup rather than at first call.
    ///
    /// Reads:
    /// - `RAPID_API_KEY` (required)
    /// - `RAPID_API_HOST` (required)
    /// - `PROVIDER_ENDPOINT` (optional, defaults to [`DEFAULT_ENDPOINT`])
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("RAPID_API_KEY")
            .map_err(|_| ConfigError::new("RAPID_API_KEY not set"))?;
        let api_host = std::env::var("RAPID_API_HOST")
            .map_err(|_| ConfigError::new("RAPID_API_HOST not set"))?;
        let endpoint =
            std::env::var("PROVIDER_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let config = Self {
            endpoint,
            api_key,
            api_host,
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the provider endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Reject empty credentials or endpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::new("provider endpoint is empty"));
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::new("provider API key is empty"));
        }
        if self.api_host.is_empty() {
            return Err(ConfigError::new("provider API host is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_endpoint() {
        let config = ProviderConfig::new("key", "host");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn with_endpoint_overrides_default() {
        let config = ProviderConfig::new("key", "host").with_endpoint("http://localhost:9999");
        assert_eq!(config.endpoint, "http://localhost:9999");
    }

    #[test]
    fn validate_rejects_empty_credentials() {
        assert!(ProviderConfig::new("", "host").validate().is_err());
        assert!(ProviderConfig::new("key", "").validate().is_err());
        assert!(ProviderConfig::new("key", "host")
            .with_endpoint("")
            .validate()
            .is_err());
    }
}
