//! Resolution orchestration.

use instafetch_core::{normalize, validate_target_url, MediaResult};
use instafetch_error::InstafetchResult;
use instafetch_provider::MediaFetcher;
use std::sync::Arc;
use tracing::instrument;

/// Resolves a target URL into a canonical [`MediaResult`].
///
/// The three steps of a resolution call: validate (synchronous), fetch (the
/// only suspension point), normalize (pure). If the caller aborts, dropping
/// the future cancels the in-flight outbound call.
#[derive(Clone)]
pub struct Resolver {
    fetcher: Arc<dyn MediaFetcher>,
}

impl Resolver {
    /// Create a new resolver over a fetcher.
    pub fn new(fetcher: Arc<dyn MediaFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolve a target URL.
    ///
    /// Rejects input failing the domain pre-filter before any network call
    /// is made. All failures are terminal for the call; nothing is retried.
    #[instrument(skip(self))]
    pub async fn resolve(&self, url: &str) -> InstafetchResult<MediaResult> {
        validate_target_url(url)?;
        let raw = self.fetcher.fetch(url).await?;
        Ok(normalize(&raw)?)
    }
}
