//! HTTP surface for the InstaFetch media resolution service.
//!
//! A single resolution endpoint plus liveness routes. Each request is handled
//! independently: validate, one outbound fetch, normalize. No shared mutable
//! state, no caching, no request coalescing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod resolve;
mod response;

pub use api::{create_router, ApiState};
pub use resolve::Resolver;
pub use response::{DownloadResponse, ErrorResponse};
