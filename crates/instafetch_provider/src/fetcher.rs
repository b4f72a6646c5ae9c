//! The fetch seam between the resolver and the outside world.

use instafetch_error::InstafetchResult;
use serde_json::Value;

/// Fetches the raw resolution payload for a target URL.
///
/// [`crate::ProviderClient`] is the production implementation; tests drive
/// the resolver with stubs.
#[async_trait::async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Fetch the provider's raw JSON payload for the given target URL.
    ///
    /// Exactly one outbound call per invocation; all failures are terminal
    /// for the call.
    async fn fetch(&self, target_url: &str) -> InstafetchResult<Value>;
}
