//! Core data types and normalization logic for the InstaFetch media
//! resolution service.
//!
//! This crate is pure: it owns the canonical [`MediaResult`] contract, the
//! inbound URL pre-filter, and the strategy chain that interprets the
//! upstream provider's loosely-typed payloads. All I/O lives in
//! `instafetch_provider` and `instafetch_server`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod normalize;
mod validate;

pub use media::{MediaKind, MediaResult, DEFAULT_AUTHOR, PLACEHOLDER_THUMBNAIL};
pub use normalize::normalize;
pub use validate::{validate_target_url, INSTAGRAM_HOST};
