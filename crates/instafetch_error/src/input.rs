//! Input validation error types.

/// Error raised when an inbound URL fails the Instagram domain pre-filter.
///
/// Raised before any network call is made.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid Instagram URL: {} at line {} in {}", input, line, file)]
pub struct InvalidInputError {
    /// The rejected input string
    pub input: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InvalidInputError {
    /// Create a new InvalidInputError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use instafetch_error::InvalidInputError;
    ///
    /// let err = InvalidInputError::new("not-a-url");
    /// assert_eq!(err.input, "not-a-url");
    /// ```
    #[track_caller]
    pub fn new(input: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            input: input.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
