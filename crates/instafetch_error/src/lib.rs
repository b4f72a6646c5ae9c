//! Error types for the InstaFetch media resolution service.
//!
//! All errors follow the kind + wrapper pattern:
//! - a concrete error struct (or kind enum) describes the condition
//! - the wrapper captures source location via `#[track_caller]`
//! - everything converts into the top-level [`InstafetchError`]
//!
//! # Examples
//!
//! ```
//! use instafetch_error::{InstafetchResult, InvalidInputError};
//!
//! fn check(url: &str) -> InstafetchResult<()> {
//!     Err(InvalidInputError::new(url))?
//! }
//!
//! assert!(check("not-a-url").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod input;
mod resolve;
mod upstream;

pub use config::ConfigError;
pub use error::{InstafetchError, InstafetchErrorKind, InstafetchResult};
pub use input::InvalidInputError;
pub use resolve::MediaNotFoundError;
pub use upstream::{UpstreamHttpError, UpstreamTransportError};
