//! Cache-Control directive tokenization.
//!
//! Directive membership uses exact token comparison after trimming and
//! lowercasing, so `no-cache` does not fire on a hypothetical
//! `x-no-cache-ext` token. The numeric lifetimes are pulled out with
//! patterns instead, matching first occurrence when a malformed header
//! repeats them.

use std::sync::LazyLock;

use regex::Regex;

// `max-age` cannot accidentally match inside `s-maxage`: the s- form has no
// hyphen between "max" and "age".
static MAX_AGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)max-age=(\d+)").expect("valid pattern"));
static S_MAXAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)s-maxage=(\d+)").expect("valid pattern"));

/// Tests whether a Cache-Control value contains the given directive token.
///
/// Splits the value on `,`, trims and lowercases each token, then compares
/// exactly. `directive` is expected lowercase.
pub fn has_directive(cache_control: &str, directive: &str) -> bool {
    cache_control
        .split(',')
        .any(|token| token.trim().to_ascii_lowercase() == directive)
}

/// Extracts the `max-age` lifetime in seconds, first match winning.
pub fn max_age(cache_control: &str) -> Option<u64> {
    parse_lifetime(&MAX_AGE_RE, cache_control)
}

/// Extracts the `s-maxage` lifetime in seconds, first match winning.
pub fn s_maxage(cache_control: &str) -> Option<u64> {
    parse_lifetime(&S_MAXAGE_RE, cache_control)
}

fn parse_lifetime(re: &Regex, value: &str) -> Option<u64> {
    // An absurdly large number fails the u64 parse and is treated as absent
    re.captures(value).and_then(|caps| caps[1].parse().ok())
}
