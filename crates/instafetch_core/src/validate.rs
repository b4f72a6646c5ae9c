//! Inbound URL validation.

use instafetch_error::InvalidInputError;

/// Host fragment identifying the source platform.
pub const INSTAGRAM_HOST: &str = "instagram.com";

/// Guard against obviously invalid input before spending a network call.
///
/// Succeeds only if the string contains the literal `instagram.com` host
/// fragment. This is a deliberately weak pre-filter (a substring check, not a
/// URL parse) and not a security boundary.
///
/// # Examples
///
/// ```
/// use instafetch_core::validate_target_url;
///
/// assert!(validate_target_url("https://www.instagram.com/reel/Cabc123XYZ/").is_ok());
/// assert!(validate_target_url("not-a-url").is_err());
/// ```
pub fn validate_target_url(url: &str) -> Result<(), InvalidInputError> {
    if url.contains(INSTAGRAM_HOST) {
        Ok(())
    } else {
        Err(InvalidInputError::new(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reel_and_post_urls() {
        assert!(validate_target_url("https://www.instagram.com/reel/Cabc123XYZ/").is_ok());
        assert!(validate_target_url("https://instagram.com/p/Xyz/").is_ok());
    }

    #[test]
    fn rejects_non_instagram_input() {
        assert!(validate_target_url("not-a-url").is_err());
        assert!(validate_target_url("https://example.com/video").is_err());
        assert!(validate_target_url("").is_err());
    }

    #[test]
    fn rejection_keeps_the_offending_input() {
        let err = validate_target_url("not-a-url").unwrap_err();
        assert_eq!(err.input, "not-a-url");
    }
}
