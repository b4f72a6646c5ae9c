//! The canonical media result contract.

use serde::{Deserialize, Serialize};

/// Placeholder thumbnail substituted when the provider omits one, so
/// downstream rendering never needs a null check.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://placehold.co/600x400?text=Media+Found";

/// Sentinel author handle used when the provider does not identify one.
pub const DEFAULT_AUTHOR: &str = "Instagram User";

/// Classification of a resolved media asset.
///
/// # Examples
///
/// ```
/// use instafetch_core::MediaKind;
///
/// assert_eq!(MediaKind::from_url_hint("https://cdn.example/a.mp4"), MediaKind::Video);
/// assert_eq!(MediaKind::from_url_hint("https://cdn.example/a.jpg?x=1"), MediaKind::Image);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A video asset (the default; the provider rarely distinguishes)
    #[default]
    Video,
    /// An image asset
    Image,
}

impl MediaKind {
    /// Best-effort classification from a file-extension hint on the asset
    /// URL. Everything without a recognized image extension stays video,
    /// mirroring the upstream provider's own limitation.
    pub fn from_url_hint(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let ext = path.rsplit('.').next().unwrap_or("");
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" => Self::Image,
            _ => Self::Video,
        }
    }
}

/// The normalized result of a successful resolution.
///
/// Invariants: `download_url` is always non-empty (absence is a resolution
/// failure, not a degraded success) and `thumbnail_url` is always present
/// (sentinel substitution guarantees it). The `download_url` is
/// provider-issued and typically short-lived.
///
/// # Examples
///
/// ```
/// use instafetch_core::{MediaKind, MediaResult, DEFAULT_AUTHOR, PLACEHOLDER_THUMBNAIL};
///
/// let result = MediaResult {
///     kind: MediaKind::Video,
///     download_url: "https://cdn.example/a.mp4".to_string(),
///     thumbnail_url: PLACEHOLDER_THUMBNAIL.to_string(),
///     author: DEFAULT_AUTHOR.to_string(),
/// };
///
/// assert!(!result.download_url.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaResult {
    /// Classification of the returned asset
    pub kind: MediaKind,
    /// Direct link to the media asset
    pub download_url: String,
    /// Preview image, placeholder-substituted when the provider omits one
    pub thumbnail_url: String,
    /// Best-effort author handle
    pub author: String,
}
