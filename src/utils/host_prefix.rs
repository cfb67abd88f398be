//! Host prefix extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Builds the prefix that short codes are appended to, e.g. `http://localhost:3000/`.
///
/// Uses the `Host` header verbatim (port included). The scheme is `https` when a
/// proxy reports `X-Forwarded-Proto: https`, otherwise `http`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8 or a path separator
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// let prefix = host_prefix_from_headers(&headers).unwrap();
/// assert_eq!(prefix, "http://example.com:8080/");
/// ```
pub fn host_prefix_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("missing_host", "Missing Host header"))?
        .to_str()
        .map_err(|_| AppError::bad_request("invalid_host", "Invalid Host header"))?
        .trim();

    if host.is_empty() || host.contains('/') {
        return Err(AppError::bad_request("invalid_host", "Invalid Host header"));
    }

    let scheme = match headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
    {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    Ok(format!("{scheme}://{host}/"))
}
