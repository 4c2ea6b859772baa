//! URL validation.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::InvalidUrlError;

/// Validates a target URL before any network I/O.
///
/// Accepts only syntactically valid http/https URLs and rejects URLs longer
/// than [`MAX_URL_LENGTH`]. No scheme auto-prefixing is performed: a
/// diagnostic tool must request exactly what the caller typed, because
/// scheme and host choose the edge map the request lands on. A non-empty
/// host is guaranteed by the url crate itself, which refuses host-less
/// http/https URLs at parse time.
///
/// # Errors
///
/// Returns an [`InvalidUrlError`] describing why the URL was rejected.
pub fn validate_url(url: &str) -> Result<Url, InvalidUrlError> {
    if url.len() > MAX_URL_LENGTH {
        return Err(InvalidUrlError::TooLong {
            length: url.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(url).map_err(|_| InvalidUrlError::Malformed(url.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(InvalidUrlError::UnsupportedScheme {
            scheme: other.to_string(),
            url: url.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::validate_url;
    use crate::error_handling::InvalidUrlError;

    #[test]
    fn test_validate_url_accepts_https() {
        let url = validate_url("https://www.example.com/page?x=1").expect("should validate");
        assert_eq!(url.host_str(), Some("www.example.com"));
    }

    #[test]
    fn test_validate_url_accepts_http() {
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_missing_scheme() {
        // No auto-prefixing: the caller must say which scheme to diagnose
        assert!(matches!(
            validate_url("www.example.com"),
            Err(InvalidUrlError::Malformed(_))
        ));
    }

    #[test]
    fn test_validate_url_rejects_unsupported_scheme() {
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(InvalidUrlError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_validate_url_host_handling_follows_url_crate() {
        // The url crate treats the first path segment after empty slashes as
        // the host, so this parses with host "path-only" and is accepted
        let url = validate_url("https:///path-only").expect("normalized by the url crate");
        assert_eq!(url.host_str(), Some("path-only"));

        // A genuinely host-less http/https URL fails at parse time
        assert!(matches!(
            validate_url("https://"),
            Err(InvalidUrlError::Malformed(_))
        ));
    }

    #[test]
    fn test_validate_url_rejects_garbage() {
        assert!(validate_url("not a url at all!!!").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn test_validate_url_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(2100));
        assert!(matches!(
            validate_url(&long),
            Err(InvalidUrlError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_url_accepts_port_and_ipv6() {
        assert!(validate_url("https://example.com:8443/x").is_ok());
        assert!(validate_url("http://[2001:db8::1]/").is_ok());
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_validate_url_never_panics(input in ".{0,300}") {
            let _ = validate_url(&input);
        }

        #[test]
        fn test_validate_url_accepts_simple_hosts(domain in "[a-z]{3,20}\\.[a-z]{2,5}") {
            let url = format!("https://{domain}/");
            prop_assert!(validate_url(&url).is_ok());
        }
    }
}
