//! HTTP client for the upstream resolution provider.

use crate::{MediaFetcher, ProviderConfig};
use instafetch_error::{
    InstafetchResult, MediaNotFoundError, UpstreamHttpError, UpstreamTransportError,
};
use serde_json::Value;
use tracing::instrument;

/// Client for the third-party resolution API.
///
/// One GET per invocation: the target URL rides as the `url` query parameter
/// and the credentials as `x-rapidapi-key` / `x-rapidapi-host` headers. No
/// retry policy and no explicit deadline; timeout behavior is whatever the
/// transport defaults to.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl ProviderClient {
    /// Create a new provider client.
    #[instrument(skip(config), fields(endpoint = %config.endpoint))]
    pub fn new(config: ProviderConfig) -> Self {
        tracing::debug!("Creating provider client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the provider configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetch the provider's raw JSON payload for a target URL.
    #[instrument(skip(self))]
    pub async fn fetch_raw(&self, target_url: &str) -> InstafetchResult<Value> {
        tracing::debug!("Fetching via provider: {}", target_url);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("url", target_url)])
            .header("x-rapidapi-key", &self.config.api_key)
            .header("x-rapidapi-host", &self.config.api_host)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Provider request failed: {}", e);
                UpstreamTransportError::new(format!("Provider request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read provider response: {}", e);
            UpstreamTransportError::new(format!("Failed to read provider response: {}", e))
        })?;

        // Diagnostic only, never functional
        tracing::debug!(status = %status, body = %body, "Provider response");

        if !status.is_success() {
            tracing::error!("Provider returned error: {}", status);
            return Err(UpstreamHttpError::new(status.as_u16(), body).into());
        }

        // A 2xx body that is not JSON is a payload this system cannot
        // interpret, same as a shape no strategy matches.
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Provider returned non-JSON body: {}", e);
            MediaNotFoundError::new(Value::String(body)).into()
        })
    }
}

#[async_trait::async_trait]
impl MediaFetcher for ProviderClient {
    async fn fetch(&self, target_url: &str) -> InstafetchResult<Value> {
        self.fetch_raw(target_url).await
    }
}
