//! The semantic analysis record.

use serde::Serialize;

use crate::parse::TtlSource;

/// A single extracted field: a concrete value or an explicit unknown.
///
/// Fields are never absent/null internally, so presentation code does not
/// branch on missing-vs-empty; the `Display` form of `Unknown` is the
/// literal `unknown`. Serializes as the string value or JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Field {
    /// A concrete value captured from the headers
    Known(String),
    /// The source header was absent or unparseable
    Unknown,
}

impl Field {
    /// Wraps an optional header value, trimming nothing.
    pub fn from_opt(value: Option<&str>) -> Self {
        match value {
            Some(v) => Field::Known(v.to_string()),
            None => Field::Unknown,
        }
    }

    /// Returns the concrete value, if known.
    pub fn as_known(&self) -> Option<&str> {
        match self {
            Field::Known(v) => Some(v),
            Field::Unknown => None,
        }
    }

    /// Returns true when a concrete value was captured.
    pub fn is_known(&self) -> bool {
        matches!(self, Field::Known(_))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Known(v) => write!(f, "{v}"),
            Field::Unknown => write!(f, "unknown"),
        }
    }
}

impl From<Option<String>> for Field {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => Field::Known(v),
            None => Field::Unknown,
        }
    }
}

/// Which Akamai network served the response.
///
/// Derived from the `X-Akamai-Staging` header: the staging network announces
/// itself with the value `ESSL`; everything else is production. Never
/// unknown — absence of the header means production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AkamaiNetwork {
    /// The production edge network
    Production,
    /// The staging edge network (ESSL)
    Staging,
}

impl std::fmt::Display for AkamaiNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AkamaiNetwork::Production => write!(f, "Production"),
            AkamaiNetwork::Staging => write!(f, "Staging"),
        }
    }
}

/// The semantic result of analyzing one response's headers.
///
/// Constructed once per fetch by [`extract`](crate::analysis::extract),
/// annotated once by [`resolve_ttl`](crate::analysis::resolve_ttl), then
/// treated as immutable until discarded after rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    /// First token of `X-Cache` (e.g. `TCP_HIT`)
    pub cache_status: Field,
    /// Edge hostname after the `from` marker in `X-Cache`
    pub cache_server_hostname: Field,
    /// Edge cacheability decision (`X-Check-Cacheable`)
    pub cacheability: Field,
    /// Cache key (`X-Cache-Key`)
    pub cache_key: Field,
    /// Untransformed cache key (`X-True-Cache-Key`)
    pub true_cache_key: Field,
    /// Serving edge machine ID (`X-Cache-Server`)
    pub edge_server_id: Field,
    /// Edge configuration serial number (`X-Serial`)
    pub serial_number: Field,
    /// Akamai request ID (`X-Akamai-Request-ID`)
    pub request_id: Field,
    /// Originating client IP, first of the proxy chain
    pub client_ip: Field,
    /// Geo-located client city (session info)
    pub client_city: Field,
    /// Geo-located client country (session info)
    pub client_country: Field,
    /// Origin server identifier (`X-Origin-Server`)
    pub origin_server: Field,
    /// Edge-to-midgress RTT in ms (`X-EdgeConnect-MidMile-RTT`)
    pub midmile_rtt: Field,
    /// Edge-to-origin latency in ms (`X-EdgeConnect-Origin-MEX-Latency`)
    pub origin_latency: Field,
    /// Response `Date`
    pub date: Field,
    /// Response `Content-Type`
    pub content_type: Field,
    /// Response `Content-Length`
    pub content_length: Field,
    /// Response `Last-Modified`
    pub last_modified: Field,
    /// Response `ETag`
    pub etag: Field,
    /// Response `Expires`
    pub expires: Field,
    /// Response `Cache-Control`
    pub cache_control: Field,
    /// Response `Vary`
    pub vary: Field,
    /// Which Akamai network served the response
    pub akamai_network: AkamaiNetwork,
    /// Property (delivery configuration) name (session info)
    pub property_name: Field,
    /// Property version (session info)
    pub property_version: Field,
    /// Forward URL the edge rewrote to (session info)
    pub fwd_url: Field,
    /// SureRoute enablement flag (session info, `true`/`false`)
    pub sureroute_enabled: Field,
    /// Tiered distribution enablement flag (session info, `true`/`false`)
    pub tiered_distribution_enabled: Field,
    /// Origin-declared TTL in seconds, once resolved
    pub origin_ttl_seconds: Option<u64>,
    /// Provenance of the origin TTL
    pub origin_ttl_source: TtlSource,
    /// TTL token embedded in the cache key, when present
    pub cache_key_ttl: Option<String>,
}
