//! Top-level error wrapper types.

use crate::{
    ConfigError, InvalidInputError, MediaNotFoundError, UpstreamHttpError, UpstreamTransportError,
};

/// Discriminated union of every failure a resolution call can surface.
///
/// # Examples
///
/// ```
/// use instafetch_error::{InstafetchError, UpstreamHttpError};
///
/// let err: InstafetchError = UpstreamHttpError::new(429, "slow down").into();
/// assert!(format!("{}", err).contains("429"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum InstafetchErrorKind {
    /// Input failed the domain pre-filter; never reached the network
    #[from(InvalidInputError)]
    InvalidInput(InvalidInputError),
    /// Network-level failure reaching the provider
    #[from(UpstreamTransportError)]
    UpstreamTransport(UpstreamTransportError),
    /// Provider responded with a non-2xx status
    #[from(UpstreamHttpError)]
    UpstreamHttp(UpstreamHttpError),
    /// Provider responded 2xx but the payload yielded no asset URL
    #[from(MediaNotFoundError)]
    MediaNotFound(MediaNotFoundError),
    /// Process configuration missing or malformed
    #[from(ConfigError)]
    Config(ConfigError),
}

/// InstaFetch error with kind discrimination.
///
/// # Examples
///
/// ```
/// use instafetch_error::{InstafetchErrorKind, InstafetchResult, InvalidInputError};
///
/// fn resolve() -> InstafetchResult<()> {
///     Err(InvalidInputError::new("nope"))?
/// }
///
/// match resolve() {
///     Ok(_) => unreachable!(),
///     Err(e) => assert!(matches!(e.kind(), InstafetchErrorKind::InvalidInput(_))),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("InstaFetch Error: {}", _0)]
pub struct InstafetchError(Box<InstafetchErrorKind>);

impl InstafetchError {
    /// Create a new error from a kind.
    pub fn new(kind: InstafetchErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InstafetchErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to InstafetchErrorKind
impl<T> From<T> for InstafetchError
where
    T: Into<InstafetchErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for InstaFetch operations.
pub type InstafetchResult<T> = std::result::Result<T, InstafetchError>;
