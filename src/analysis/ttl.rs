//! Effective cache TTL resolution.

use crate::parse::{extract_cache_key_ttl, resolve_origin_ttl};

use super::record::AnalysisRecord;

/// Annotates the record with the effective cache TTL and its provenance.
///
/// The cache-key-embedded TTL token is tried first — against `cache_key`,
/// then `true_cache_key` — because it is edge-declared and more trustworthy
/// than anything inferred from origin headers. The origin TTL (s-maxage >
/// max-age > Expires−Date > unknown) is resolved regardless and reported,
/// explicitly labeled by its source, when no cache-key token exists.
///
/// After this call the record is complete and treated as immutable.
pub fn resolve_ttl(record: &mut AnalysisRecord) {
    record.cache_key_ttl = record
        .cache_key
        .as_known()
        .and_then(extract_cache_key_ttl)
        .or_else(|| record.true_cache_key.as_known().and_then(extract_cache_key_ttl));

    let origin = resolve_origin_ttl(
        record.cache_control.as_known(),
        record.expires.as_known(),
        record.date.as_known(),
    );
    record.origin_ttl_seconds = origin.seconds;
    record.origin_ttl_source = origin.source;
}

/// Formats a TTL in seconds as a human-readable string.
///
/// Zero gets a caching-semantics gloss; positive values round down into the
/// largest whole unit.
pub fn format_ttl(seconds: Option<u64>) -> String {
    match seconds {
        None => "unknown".to_string(),
        Some(0) => "0 seconds (effectively not cached or must revalidate)".to_string(),
        Some(s) if s < 60 => format!("{s} seconds"),
        Some(s) if s < 3600 => format!("{} minutes", s / 60),
        Some(s) if s < 86400 => format!("{} hours", s / 3600),
        Some(s) => format!("{} days", s / 86400),
    }
}
