//! HTTP header name and session-info key constants.
//!
//! This module defines constants for the Akamai diagnostic response headers
//! the extractor reads, plus the vendor keys looked up inside the
//! `X-Akamai-Session-Info` blob.

// Akamai diagnostic headers
// These appear only when the matching debug Pragma directive was sent.
/// Cache status and serving edge hostname (e.g. `TCP_HIT from edge123 (1)`)
pub const HEADER_X_CACHE: &str = "x-cache";
/// Edge decision on whether the object was cacheable (`YES`/`NO`)
pub const HEADER_X_CHECK_CACHEABLE: &str = "x-check-cacheable";
/// Cache key used for the object, sometimes embedding a TTL segment
pub const HEADER_X_CACHE_KEY: &str = "x-cache-key";
/// Cache key before edge-side transformations
pub const HEADER_X_TRUE_CACHE_KEY: &str = "x-true-cache-key";
/// Identifier of the serving edge machine
pub const HEADER_X_CACHE_SERVER: &str = "x-cache-server";
/// Serial number of the edge configuration
pub const HEADER_X_SERIAL: &str = "x-serial";
/// Unique Akamai request identifier, the key for opening support tickets
pub const HEADER_X_AKAMAI_REQUEST_ID: &str = "x-akamai-request-id";
/// Client IP as seen by the edge (may list a proxy chain)
pub const HEADER_X_AKAMAI_PRAGMA_CLIENT_IP: &str = "x-akamai-pragma-client-ip";
/// Property-manager session metadata blob
pub const HEADER_X_AKAMAI_SESSION_INFO: &str = "x-akamai-session-info";
/// Present with value `ESSL` on the staging network
pub const HEADER_X_AKAMAI_STAGING: &str = "x-akamai-staging";
/// Origin server identifier echoed by the edge
pub const HEADER_X_ORIGIN_SERVER: &str = "x-origin-server";
/// Edge-to-midgress round-trip time in milliseconds
pub const HEADER_X_EDGECONNECT_MIDMILE_RTT: &str = "x-edgeconnect-midmile-rtt";
/// Edge-to-origin latency in milliseconds
pub const HEADER_X_EDGECONNECT_ORIGIN_LATENCY: &str = "x-edgeconnect-origin-mex-latency";

// Standard caching and content headers
/// Response generation time at the edge
pub const HEADER_DATE: &str = "date";
/// Content-Type of the delivered representation
pub const HEADER_CONTENT_TYPE: &str = "content-type";
/// Content-Length of the delivered representation
pub const HEADER_CONTENT_LENGTH: &str = "content-length";
/// Last-Modified timestamp from the origin
pub const HEADER_LAST_MODIFIED: &str = "last-modified";
/// Entity tag from the origin
pub const HEADER_ETAG: &str = "etag";
/// Expiry timestamp from the origin
pub const HEADER_EXPIRES: &str = "expires";
/// Cache-Control directive set from the origin
pub const HEADER_CACHE_CONTROL: &str = "cache-control";
/// Vary header from the origin
pub const HEADER_VARY: &str = "vary";

// Session-info vendor keys
// Fixed key names inside the X-Akamai-Session-Info name/value pairs.
/// Property (delivery configuration) name
pub const SESSION_KEY_PROPERTY_NAME: &str = "AKA_PM_PROPERTY_NAME";
/// Property version number
pub const SESSION_KEY_PROPERTY_VERSION: &str = "AKA_PM_PROPERTY_VERSION";
/// Forward URL the edge rewrote the request to
pub const SESSION_KEY_FWD_URL: &str = "AKA_PM_FWD_URL";
/// SureRoute enablement flag (`true`/`false`)
pub const SESSION_KEY_SR_ENABLED: &str = "AKA_PM_SR_ENABLED";
/// Tiered distribution enablement flag (`true`/`false`)
pub const SESSION_KEY_TD_ENABLED: &str = "AKA_PM_TD_ENABLED";
/// Geo-located client city
pub const SESSION_KEY_CLIENT_CITY: &str = "PMUSER_CITY";
/// Geo-located client country
pub const SESSION_KEY_CLIENT_COUNTRY: &str = "PMUSER_COUNTRY";
/// Percent-encoded client User-Agent echo
pub const SESSION_KEY_UA_IDENTIFIER: &str = "UA_IDENTIFIER";

/// Headers whose comma-separated values are split onto indented lines in the
/// raw header report. These carry multiple logical records in one value and
/// are unreadable on a single line.
///
/// To add/remove headers, modify this array (names lowercase).
pub const COMPOSITE_HEADERS: &[&str] = &[
    HEADER_X_AKAMAI_SESSION_INFO,
    "x-akamai-a2-trace",
    "accept-ch",
];
