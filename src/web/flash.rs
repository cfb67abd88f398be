//! One-shot flash messages carried across a redirect in a cookie.
//!
//! The cookie only carries a message key; the text shown to the user is looked
//! up server-side, so cookie contents are never rendered.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

use crate::application::services::shorten_service::INVALID_URL_MESSAGE;

const FLASH_COOKIE: &str = "flash";

/// Messages that can be flashed to the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    InvalidUrl,
}

impl Flash {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "invalid_url" => Some(Flash::InvalidUrl),
            _ => None,
        }
    }

    /// Text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Flash::InvalidUrl => INVALID_URL_MESSAGE,
        }
    }

    /// `Set-Cookie` value that stores this message until the next page view.
    pub fn set_cookie(self) -> HeaderValue {
        HeaderValue::from_static(match self {
            Flash::InvalidUrl => "flash=invalid_url; Path=/; HttpOnly; SameSite=Lax",
        })
    }
}

/// `Set-Cookie` value that removes a consumed flash message.
pub fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Reads the pending flash message, if any.
///
/// Handles multiple cookies in the `Cookie` header and ignores unknown keys.
pub fn read(headers: &HeaderMap) -> Option<Flash> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(FLASH_COOKIE), Some(value)) => Flash::from_key(value),
                _ => None,
            }
        })
}

/// Returns true if the request carries a flash cookie, recognised or not.
pub fn is_present(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .any(|cookie| cookie.trim().starts_with("flash="))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(cookie: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static(cookie));
        headers
    }

    #[test]
    fn test_read_flash() {
        let headers = headers_with_cookie("flash=invalid_url");
        assert_eq!(read(&headers), Some(Flash::InvalidUrl));
        assert!(is_present(&headers));
    }

    #[test]
    fn test_read_flash_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; flash=invalid_url; lang=en");
        assert_eq!(read(&headers), Some(Flash::InvalidUrl));
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let headers = headers_with_cookie("flash=<script>");
        assert_eq!(read(&headers), None);
        assert!(is_present(&headers));
    }

    #[test]
    fn test_no_cookie() {
        let headers = HeaderMap::new();
        assert_eq!(read(&headers), None);
        assert!(!is_present(&headers));
    }

    #[test]
    fn test_set_cookie_round_trip() {
        let set = Flash::InvalidUrl.set_cookie();
        let pair = set.to_str().unwrap().split(';').next().unwrap();
        assert_eq!(pair, "flash=invalid_url");
        assert_eq!(Flash::from_key("invalid_url"), Some(Flash::InvalidUrl));

        let clear = clear_cookie();
        assert!(clear.to_str().unwrap().contains("Max-Age=0"));
    }

    #[test]
    fn test_message_text() {
        assert_eq!(
            Flash::InvalidUrl.message(),
            "Please enter a valid URL (with http:// or https://)"
        );
    }
}
