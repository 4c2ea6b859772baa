//! Origin TTL resolution from Cache-Control, Expires and Date.
//!
//! The precedence encodes real HTTP shared-cache semantics and must not be
//! reordered: `s-maxage` (shared caches) beats `max-age` (any cache), both
//! beat the legacy `Expires`/`Date` delta, and a `no-cache`/`no-store`/
//! `private` directive forces a Cache-Control-derived TTL to zero after the
//! fact.

use chrono::DateTime;
use serde::{Serialize, Serializer};

use crate::parse::cache_control;

/// Where the resolved origin TTL came from.
///
/// The `Display` form is the label rendered next to the TTL in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlSource {
    /// `s-maxage` directive
    SMaxAge,
    /// `max-age` directive
    MaxAge,
    /// `s-maxage` was present but zeroed by `no-cache`/`no-store`/`private`
    SMaxAgeOverridden,
    /// `max-age` was present but zeroed by `no-cache`/`no-store`/`private`
    MaxAgeOverridden,
    /// No positive lifetime; `no-cache`/`no-store`/`private` decided TTL 0
    NoCachePrivate,
    /// `Expires` minus `Date`, both RFC 2822 dates
    Expires,
    /// `Expires` at or before `Date`: already stale on arrival
    ExpiresPast,
    /// Neither source present, or dates unparseable
    Unknown,
}

impl std::fmt::Display for TtlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TtlSource::SMaxAge => "s-maxage",
            TtlSource::MaxAge => "max-age",
            TtlSource::SMaxAgeOverridden => "s-maxage (overridden by no-cache/private)",
            TtlSource::MaxAgeOverridden => "max-age (overridden by no-cache/private)",
            TtlSource::NoCachePrivate => "no-cache/private",
            TtlSource::Expires => "Expires header",
            TtlSource::ExpiresPast => "Expires header (past date)",
            TtlSource::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

impl Serialize for TtlSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The resolved origin TTL: seconds (when determinable) and provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginTtl {
    /// Effective lifetime in whole seconds; `None` when undeterminable
    pub seconds: Option<u64>,
    /// Which header decided the lifetime
    pub source: TtlSource,
}

/// Resolves the origin-declared TTL from the caching headers.
///
/// Precedence: `s-maxage` > `max-age` > `Expires` − `Date` > unknown. The
/// `no-cache`/`no-store`/`private` override applies only after a
/// Cache-Control-based TTL was chosen (or when Cache-Control is present with
/// none) and pins the TTL to zero — which also means the `Expires` fallback
/// is skipped, because a TTL of zero has been decided.
///
/// Absent headers are passed as `None`. Unparseable dates resolve to
/// unknown, never to an error.
pub fn resolve_origin_ttl(
    cache_control: Option<&str>,
    expires: Option<&str>,
    date: Option<&str>,
) -> OriginTtl {
    let mut seconds = None;
    let mut source = TtlSource::Unknown;

    if let Some(cc) = cache_control {
        if let Some(secs) = cache_control::s_maxage(cc) {
            seconds = Some(secs);
            source = TtlSource::SMaxAge;
        } else if let Some(secs) = cache_control::max_age(cc) {
            seconds = Some(secs);
            source = TtlSource::MaxAge;
        }

        let uncacheable = cache_control::has_directive(cc, "no-cache")
            || cache_control::has_directive(cc, "no-store")
            || cache_control::has_directive(cc, "private");
        if uncacheable {
            source = match (source, seconds) {
                (TtlSource::SMaxAge, Some(s)) if s > 0 => TtlSource::SMaxAgeOverridden,
                (TtlSource::MaxAge, Some(s)) if s > 0 => TtlSource::MaxAgeOverridden,
                _ => TtlSource::NoCachePrivate,
            };
            seconds = Some(0);
        }
    }

    if seconds.is_none() {
        if let (Some(expires), Some(date)) = (expires, date) {
            if let (Ok(expires_dt), Ok(date_dt)) = (
                DateTime::parse_from_rfc2822(expires),
                DateTime::parse_from_rfc2822(date),
            ) {
                if expires_dt > date_dt {
                    seconds = Some((expires_dt - date_dt).num_seconds() as u64);
                    source = TtlSource::Expires;
                } else {
                    seconds = Some(0);
                    source = TtlSource::ExpiresPast;
                }
            }
        }
    }

    OriginTtl { seconds, source }
}
