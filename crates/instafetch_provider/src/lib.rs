//! Upstream provider adapter for the InstaFetch media resolution service.
//!
//! Performs exactly one outbound GET per invocation against the configured
//! third-party resolution endpoint and hands the raw JSON payload back to the
//! normalizer. No retries, no caching; failures propagate immediately.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod fetcher;

pub use client::ProviderClient;
pub use config::{ProviderConfig, DEFAULT_ENDPOINT};
pub use fetcher::MediaFetcher;
