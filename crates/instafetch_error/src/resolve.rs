//! Resolution error types.

/// The provider responded 2xx but no strategy could extract a usable asset
/// URL from the payload.
///
/// Covers private/removed/geo-blocked content and unannounced upstream schema
/// changes. The raw payload rides along for operator diagnostics and is never
/// exposed to end users.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("No usable media URL in upstream payload at line {} in {}", line, file)]
pub struct MediaNotFoundError {
    /// The raw upstream payload, attached as diagnostic context
    pub payload: serde_json::Value,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl MediaNotFoundError {
    /// Create a new MediaNotFoundError carrying the raw payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use instafetch_error::MediaNotFoundError;
    ///
    /// let err = MediaNotFoundError::new(serde_json::json!({ "media": [] }));
    /// assert!(err.payload.get("media").is_some());
    /// ```
    #[track_caller]
    pub fn new(payload: serde_json::Value) -> Self {
        let location = std::panic::Location::caller();
        Self {
            payload,
            line: location.line(),
            file: location.file(),
        }
    }
}
