//! Configuration error types.

/// Error raised when process configuration is missing or malformed.
///
/// Raised eagerly at startup, never inside the resolution path.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
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
