//! HTTP utilities for football-data API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

/// Header carrying the football-data API key.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Build the common request headers, adding `X-Auth-Token` when a key is set.
///
/// A missing key still yields usable headers: the free tier answers a few
/// competitions without one, and the upstream 403 is handled per fetch.
pub fn auth_header_map(api_key: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
        h.insert(
            HeaderName::from_static(AUTH_TOKEN_HEADER),
            HeaderValue::from_str(key)?,
        );
    }

    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_map_with_key() {
        let headers = auth_header_map(Some("abc123")).unwrap();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(AUTH_TOKEN_HEADER).unwrap(), "abc123");
    }

    #[test]
    fn test_auth_header_map_without_key() {
        let headers = auth_header_map(None).unwrap();

        assert!(headers.contains_key(ACCEPT));
        assert!(!headers.contains_key(AUTH_TOKEN_HEADER));
    }

    #[test]
    fn test_auth_header_map_blank_key_is_ignored() {
        let headers = auth_header_map(Some("   ")).unwrap();
        assert!(!headers.contains_key(AUTH_TOKEN_HEADER));
    }

    #[test]
    fn test_auth_header_map_rejects_invalid_key() {
        assert!(auth_header_map(Some("bad\nkey")).is_err());
    }
}
