//! Validation of user-submitted target URLs.
//!
//! Accepted URLs are stored exactly as submitted (minus surrounding whitespace),
//! so that resolving a short code returns the original text unchanged.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http`/`https` URL with a host.
///
/// Returns the trimmed input on success.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for empty or whitespace-only input
/// - [`UrlValidationError::InvalidFormat`] when the URL does not parse or contains
///   control characters (they cannot be sent back in a `Location` header)
/// - [`UrlValidationError::UnsupportedProtocol`] for schemes such as `ftp:` or `javascript:`
/// - [`UrlValidationError::MissingHost`] when no host is present
pub fn validate_url(input: &str) -> Result<&str, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // The parser drops embedded tabs and newlines, but the stored text keeps them.
    if trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains control characters".to_string(),
        ));
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert_eq!(validate_url("http://example.com"), Ok("http://example.com"));
        assert_eq!(
            validate_url("https://example.com/page"),
            Ok("https://example.com/page")
        );
    }

    #[test]
    fn test_preserves_original_text() {
        let input = "HTTPS://Example.COM:443/Path?q=Rust#frag";
        assert_eq!(validate_url(input), Ok(input));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(
            validate_url("  https://example.com/a \n"),
            Ok("https://example.com/a")
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        for input in [
            "ftp://x.com",
            "file:///etc/passwd",
            "javascript:alert('xss')",
            "mailto:test@example.com",
            "data:text/plain,Hello",
        ] {
            assert_eq!(
                validate_url(input),
                Err(UrlValidationError::UnsupportedProtocol),
                "{input}"
            );
        }
    }

    #[test]
    fn test_rejects_embedded_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://exa\tmple.com/x",
            "https://example.com/\r",
            "https://example.com/\u{7f}",
        ] {
            assert!(
                matches!(validate_url(input), Err(UrlValidationError::InvalidFormat(_))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_accepts_ip_and_port() {
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_url("http://localhost:3000/test").is_ok());
    }
}
