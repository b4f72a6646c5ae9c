//! Wire types for the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use instafetch_core::{MediaKind, MediaResult};
use instafetch_error::{InstafetchError, InstafetchErrorKind};
use serde::{Deserialize, Serialize};

/// Successful resolution response body.
///
/// # Examples
///
/// ```
/// use instafetch_core::{MediaKind, MediaResult};
/// use instafetch_server::DownloadResponse;
///
/// let body = DownloadResponse::from(MediaResult {
///     kind: MediaKind::Video,
///     download_url: "https://cdn.example/a.mp4".to_string(),
///     thumbnail_url: "https://cdn.example/t.jpg".to_string(),
///     author: "someuser".to_string(),
/// });
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json["type"], "video");
/// assert_eq!(json["downloadUrl"], "https://cdn.example/a.mp4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadResponse {
    /// Always true on a 200 response
    pub success: bool,
    /// Media classification
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Direct link to the media asset; typically short-lived
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
    /// Preview image, always present
    pub thumbnail: String,
    /// Best-effort author handle
    pub author: String,
}

impl From<MediaResult> for DownloadResponse {
    fn from(result: MediaResult) -> Self {
        Self {
            success: true,
            kind: result.kind,
            download_url: result.download_url,
            thumbnail: result.thumbnail_url,
            author: result.author,
        }
    }
}

/// Failure response body.
///
/// Carries the error kind so consumers can tell content-unavailable apart
/// from a broken integration, instead of one flat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable error kind
    pub kind: String,
    /// Operator-facing detail
    pub details: String,
    /// Remediation hint
    pub tip: String,
}

const TIP: &str = "Check the server logs to see the provider response structure.";

/// Error wrapper mapping resolution failures onto HTTP responses.
///
/// Status codes discriminate the error kind: bad input is the caller's
/// fault, not-found means the upstream payload was uninterpretable, and
/// upstream failures map onto the gateway statuses.
#[derive(Debug)]
pub struct ApiError(InstafetchError);

impl From<InstafetchError> for ApiError {
    fn from(err: InstafetchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, kind) = match self.0.kind() {
            InstafetchErrorKind::InvalidInput(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid Instagram URL",
                "invalid_input",
            ),
            InstafetchErrorKind::MediaNotFound(e) => {
                tracing::error!(payload = %e.payload, "No strategy matched the provider payload");
                (
                    StatusCode::NOT_FOUND,
                    "Could not extract media from this post.",
                    "media_not_found",
                )
            }
            InstafetchErrorKind::UpstreamHttp(e) => {
                tracing::error!(status = e.status, body = %e.body, "Provider returned an error");
                (
                    StatusCode::BAD_GATEWAY,
                    "The resolution provider rejected the request.",
                    "upstream_http",
                )
            }
            InstafetchErrorKind::UpstreamTransport(e) => {
                tracing::error!("Provider unreachable: {}", e.message);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Could not reach the resolution provider.",
                    "upstream_transport",
                )
            }
            InstafetchErrorKind::Config(e) => {
                tracing::error!("Configuration error: {}", e.message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Service misconfigured.",
                    "config",
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            kind: kind.to_string(),
            details: self.0.to_string(),
            tip: TIP.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
