//! Cache-key TTL token extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the TTL segment of a slash-delimited Akamai cache key.
///
/// Grammar: an optional `S/` segment, then `L/`, then two opaque segments,
/// then the TTL token (e.g. `30s`, `1d`) as the next segment. Examples:
/// `/L/www.example.com/abc123/1d/xyz/` and `/S/L/1234/567/30s/path`.
static CACHE_KEY_TTL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(?:S/)?L/[^/]+/[^/]+/([^/]+)/").expect("valid pattern"));

/// Extracts the TTL token embedded in a cache key, if any.
///
/// Returns `None` when the key is empty or does not follow the
/// TTL-embedding format. That is an expected, non-error outcome: not all
/// cache-key formats carry a literal TTL segment.
pub fn extract_cache_key_ttl(cache_key: &str) -> Option<String> {
    if cache_key.is_empty() {
        return None;
    }
    CACHE_KEY_TTL_RE
        .captures(cache_key)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_ttl_from_l_format() {
        assert_eq!(
            extract_cache_key_ttl("/L/www.example.com/abc123/1d/xyz/"),
            Some("1d".to_string())
        );
    }

    #[test]
    fn test_extracts_ttl_from_secure_format() {
        assert_eq!(
            extract_cache_key_ttl("/S/L/17023/289442/30s/www.example.com/page.html"),
            Some("30s".to_string())
        );
    }

    #[test]
    fn test_key_without_l_marker_yields_none() {
        assert_eq!(extract_cache_key_ttl("/D/1234/567/www.example.com/"), None);
    }

    #[test]
    fn test_empty_key_yields_none() {
        assert_eq!(extract_cache_key_ttl(""), None);
    }

    #[test]
    fn test_key_with_too_few_segments_yields_none() {
        // Only one opaque segment between L/ and the would-be TTL
        assert_eq!(extract_cache_key_ttl("/L/www.example.com/1d"), None);
    }
}
