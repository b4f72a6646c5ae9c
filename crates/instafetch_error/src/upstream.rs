//! Upstream provider error types.

/// Network-level failure reaching the provider (DNS, connection reset,
/// transport timeout).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upstream transport error: {} at line {} in {}", message, line, file)]
pub struct UpstreamTransportError {
    /// The underlying transport error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UpstreamTransportError {
    /// Create a new UpstreamTransportError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

/// The provider responded with a non-2xx status.
///
/// Covers provider-side rate limiting, invalid links, and auth failures.
/// The response body is kept for operator diagnostics only.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upstream returned HTTP {} at line {} in {}", status, line, file)]
pub struct UpstreamHttpError {
    /// The HTTP status code the provider returned
    pub status: u16,
    /// Response body, for diagnostics
    pub body: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UpstreamHttpError {
    /// Create a new UpstreamHttpError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use instafetch_error::UpstreamHttpError;
    ///
    /// let err = UpstreamHttpError::new(429, "rate limited");
    /// assert_eq!(err.status, 429);
    /// ```
    #[track_caller]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            status,
            body: body.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
