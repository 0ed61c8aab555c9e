//! Utility functions and helpers

use url::Url;

/// Validate that a string is a well-formed absolute http(s) URL
pub fn is_absolute_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

/// Validate an identity-provider domain prefix
///
/// The prefix is a bare hostname (e.g. `tenant.auth0.com`): no scheme, no path,
/// no whitespace.
pub fn is_valid_domain_prefix(value: &str) -> bool {
    if value.is_empty() || value.contains("://") || value.contains('/') {
        return false;
    }

    !value.contains(char::is_whitespace)
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

/// Check whether a URL points at a loopback host
pub fn is_loopback_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(
            url.host_str(),
            Some("localhost") | Some("127.0.0.1") | Some("[::1]")
        ),
        Err(_) => false,
    }
}

/// Sanitize an identifier for logging (remove sensitive data)
///
/// Client identifiers are public but still shouldn't land verbatim in shared
/// log streams. Counts and slices by character, so multi-byte identifiers
/// never split mid-character.
pub fn sanitize_for_logging(s: &str) -> String {
    let char_count = s.chars().count();
    if char_count <= 8 {
        return s.to_string();
    }

    // Show first 4 and last 2 characters of longer identifiers
    let prefix: String = s.chars().take(4).collect();
    let suffix: String = s.chars().skip(char_count - 2).collect();
    format!("{prefix}...{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_validation() {
        assert!(is_absolute_http_url("http://127.0.0.1:5000"));
        assert!(is_absolute_http_url("https://api.example.com/v1"));
        assert!(!is_absolute_http_url("127.0.0.1:5000"));
        assert!(!is_absolute_http_url("ftp://example.com"));
        assert!(!is_absolute_http_url("/relative/path"));
        assert!(!is_absolute_http_url(""));
    }

    #[test]
    fn test_domain_prefix_validation() {
        assert!(is_valid_domain_prefix("example.auth0.com"));
        assert!(is_valid_domain_prefix("my-tenant.eu.auth0.com"));
        assert!(!is_valid_domain_prefix("https://example.auth0.com"));
        assert!(!is_valid_domain_prefix("example.auth0.com/authorize"));
        assert!(!is_valid_domain_prefix("bad host.com"));
        assert!(!is_valid_domain_prefix(""));
    }

    #[test]
    fn test_loopback_detection() {
        assert!(is_loopback_url("http://localhost:8100"));
        assert!(is_loopback_url("http://127.0.0.1:5000"));
        assert!(!is_loopback_url("https://app.example.com"));
        assert!(!is_loopback_url("not a url"));
    }

    #[test]
    fn test_sanitize_for_logging() {
        assert_eq!(
            sanitize_for_logging("yYB3As6aOc4t72pQVAs6kgjF4LXgJ1Fa"),
            "yYB3...Fa"
        );
        assert_eq!(sanitize_for_logging("abc123"), "abc123");
    }

    #[test]
    fn test_sanitize_multibyte_identifiers() {
        // 6 characters but 9 bytes: short enough to pass through untouched
        assert_eq!(sanitize_for_logging("ab\u{e9}\u{e9}\u{e9}x"), "ab\u{e9}\u{e9}\u{e9}x");
        // Long identifier with a multi-byte character straddling the cut
        assert_eq!(
            sanitize_for_logging("\u{e9}clair-client-identifier"),
            "\u{e9}cla...er"
        );
    }
}
