//! Long URL validation.
//!
//! Shortened URLs must be absolute HTTP(S) URLs; anything else (including
//! `javascript:` and `data:` schemes) is rejected before it reaches the
//! store.

use url::Url;

/// Errors that can occur during long URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates that `input` is an absolute `http://` or `https://` URL.
///
/// The URL is stored exactly as provided; this only checks that it parses
/// and carries an allowed scheme.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    let url =
        Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}
