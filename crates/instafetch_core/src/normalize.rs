//! The strategy chain that interprets upstream payloads.
//!
//! The upstream provider's schema is not contractually guaranteed and has
//! changed shape across integrations, so the payload is interpreted by an
//! explicit ordered list of pure shape-matching strategies, first match wins.

use crate::media::{MediaKind, MediaResult, DEFAULT_AUTHOR, PLACEHOLDER_THUMBNAIL};
use instafetch_error::MediaNotFoundError;
use serde_json::Value;

/// What a single strategy pulls out of the raw payload.
struct Extracted {
    url: String,
    thumbnail: Option<String>,
}

type Strategy = fn(&Value) -> Option<Extracted>;

/// Ordered strategy chain. The ordering is a design decision: the
/// structured-media shape is the current provider contract, the other two
/// cover shapes seen in earlier integrations.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("structured-media", structured_media),
    ("flat-url", flat_url),
    ("array-root", array_root),
];

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Non-empty `media` array: take the first entry's asset URL and, if
/// present, its thumbnail.
fn structured_media(raw: &Value) -> Option<Extracted> {
    let first = raw.get("media")?.as_array()?.first()?;
    Some(Extracted {
        url: non_empty_str(first.get("url")?)?,
        thumbnail: first.get("thumbnail").and_then(non_empty_str),
    })
}

/// A single top-level asset URL field; no thumbnail in this shape.
fn flat_url(raw: &Value) -> Option<Extracted> {
    Some(Extracted {
        url: non_empty_str(raw.get("url")?)?,
        thumbnail: None,
    })
}

/// The payload itself is a non-empty array whose first element carries the
/// asset URL.
fn array_root(raw: &Value) -> Option<Extracted> {
    Some(Extracted {
        url: non_empty_str(raw.as_array()?.first()?.get("url")?)?,
        thumbnail: None,
    })
}

/// Translate a raw upstream payload into the canonical [`MediaResult`].
///
/// Pure function over the payload: applies the strategy chain, then fills in
/// the thumbnail (strategy result, else a top-level `thumb` field, else the
/// placeholder sentinel) and the author (top-level `author`/`username`, else
/// the sentinel). If no strategy yields an asset URL the payload is
/// uninterpretable and the call fails with [`MediaNotFoundError`], the raw
/// payload attached for operators.
///
/// # Examples
///
/// ```
/// use instafetch_core::normalize;
/// use serde_json::json;
///
/// let raw = json!({ "media": [{ "url": "https://cdn.example/a.mp4" }] });
/// let result = normalize(&raw).unwrap();
/// assert_eq!(result.download_url, "https://cdn.example/a.mp4");
/// ```
pub fn normalize(raw: &Value) -> Result<MediaResult, MediaNotFoundError> {
    let (name, extracted) = STRATEGIES
        .iter()
        .find_map(|(name, strategy)| strategy(raw).map(|e| (*name, e)))
        .ok_or_else(|| MediaNotFoundError::new(raw.clone()))?;
    tracing::debug!(strategy = name, "Payload matched strategy");

    let thumbnail_url = extracted
        .thumbnail
        .or_else(|| raw.get("thumb").and_then(non_empty_str))
        .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());

    let author = raw
        .get("author")
        .or_else(|| raw.get("username"))
        .and_then(non_empty_str)
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

    Ok(MediaResult {
        kind: MediaKind::from_url_hint(&extracted.url),
        download_url: extracted.url,
        thumbnail_url,
        author,
    })
}
