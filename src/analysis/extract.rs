//! Raw-header-map to analysis-record extraction.

use crate::config::{
    HEADER_CACHE_CONTROL, HEADER_CONTENT_LENGTH, HEADER_CONTENT_TYPE, HEADER_DATE, HEADER_ETAG,
    HEADER_EXPIRES, HEADER_LAST_MODIFIED, HEADER_VARY, HEADER_X_AKAMAI_PRAGMA_CLIENT_IP,
    HEADER_X_AKAMAI_REQUEST_ID, HEADER_X_AKAMAI_SESSION_INFO, HEADER_X_AKAMAI_STAGING,
    HEADER_X_CACHE, HEADER_X_CACHE_KEY, HEADER_X_CACHE_SERVER, HEADER_X_CHECK_CACHEABLE,
    HEADER_X_EDGECONNECT_MIDMILE_RTT, HEADER_X_EDGECONNECT_ORIGIN_LATENCY,
    HEADER_X_ORIGIN_SERVER, HEADER_X_SERIAL, HEADER_X_TRUE_CACHE_KEY, SESSION_KEY_CLIENT_CITY,
    SESSION_KEY_CLIENT_COUNTRY, SESSION_KEY_FWD_URL, SESSION_KEY_PROPERTY_NAME,
    SESSION_KEY_PROPERTY_VERSION, SESSION_KEY_SR_ENABLED, SESSION_KEY_TD_ENABLED,
};
use crate::fetch::RawHeaders;
use crate::parse::{parse_session_info, TtlSource};

use super::record::{AkamaiNetwork, AnalysisRecord, Field};

/// Extracts the semantic analysis record from the raw header map.
///
/// Pure and total: case-insensitive lookup throughout, every field defaults
/// to the unknown sentinel when its source header is absent, and no header
/// map — however malformed — makes this function fail. TTL fields are left
/// unresolved; [`resolve_ttl`](crate::analysis::resolve_ttl) annotates them.
pub fn extract(headers: &RawHeaders) -> AnalysisRecord {
    let x_cache = headers.get(HEADER_X_CACHE);
    let (cache_status, cache_server_hostname) = split_x_cache(x_cache);

    let client_ip = headers
        .get(HEADER_X_AKAMAI_PRAGMA_CLIENT_IP)
        .and_then(first_of_list);

    let akamai_network = match headers.get(HEADER_X_AKAMAI_STAGING) {
        Some(flag) if flag.eq_ignore_ascii_case("ESSL") => AkamaiNetwork::Staging,
        _ => AkamaiNetwork::Production,
    };

    let session = parse_session_info(headers.get(HEADER_X_AKAMAI_SESSION_INFO).unwrap_or(""));
    let session_field = |key: &str| Field::from(session.get(key).cloned());

    AnalysisRecord {
        cache_status,
        cache_server_hostname,
        cacheability: Field::from_opt(headers.get(HEADER_X_CHECK_CACHEABLE)),
        cache_key: Field::from_opt(headers.get(HEADER_X_CACHE_KEY)),
        true_cache_key: Field::from_opt(headers.get(HEADER_X_TRUE_CACHE_KEY)),
        edge_server_id: Field::from_opt(headers.get(HEADER_X_CACHE_SERVER)),
        serial_number: Field::from_opt(headers.get(HEADER_X_SERIAL)),
        request_id: Field::from_opt(headers.get(HEADER_X_AKAMAI_REQUEST_ID)),
        client_ip: Field::from(client_ip),
        client_city: session_field(SESSION_KEY_CLIENT_CITY),
        client_country: session_field(SESSION_KEY_CLIENT_COUNTRY),
        origin_server: Field::from_opt(headers.get(HEADER_X_ORIGIN_SERVER)),
        midmile_rtt: Field::from_opt(headers.get(HEADER_X_EDGECONNECT_MIDMILE_RTT)),
        origin_latency: Field::from_opt(headers.get(HEADER_X_EDGECONNECT_ORIGIN_LATENCY)),
        date: Field::from_opt(headers.get(HEADER_DATE)),
        content_type: Field::from_opt(headers.get(HEADER_CONTENT_TYPE)),
        content_length: Field::from_opt(headers.get(HEADER_CONTENT_LENGTH)),
        last_modified: Field::from_opt(headers.get(HEADER_LAST_MODIFIED)),
        etag: Field::from_opt(headers.get(HEADER_ETAG)),
        expires: Field::from_opt(headers.get(HEADER_EXPIRES)),
        cache_control: Field::from_opt(headers.get(HEADER_CACHE_CONTROL)),
        vary: Field::from_opt(headers.get(HEADER_VARY)),
        akamai_network,
        property_name: session_field(SESSION_KEY_PROPERTY_NAME),
        property_version: session_field(SESSION_KEY_PROPERTY_VERSION),
        fwd_url: session_field(SESSION_KEY_FWD_URL),
        sureroute_enabled: session_field(SESSION_KEY_SR_ENABLED),
        tiered_distribution_enabled: session_field(SESSION_KEY_TD_ENABLED),
        origin_ttl_seconds: None,
        origin_ttl_source: TtlSource::Unknown,
        cache_key_ttl: None,
    }
}

/// Splits an `X-Cache` value into status token and serving hostname.
///
/// Grammar: `<STATUS> from <HOSTNAME> [(...)]` — the status is the first
/// whitespace-delimited token; the hostname is the token immediately after
/// the literal `" from "` marker, when present.
fn split_x_cache(value: Option<&str>) -> (Field, Field) {
    let Some(value) = value else {
        return (Field::Unknown, Field::Unknown);
    };
    let status = Field::from(value.split_whitespace().next().map(str::to_string));
    let hostname = value
        .split_once(" from ")
        .and_then(|(_, rest)| rest.split_whitespace().next())
        .map(str::to_string);
    (status, Field::from(hostname))
}

/// Returns the first comma-delimited entry, trimmed.
///
/// A proxy chain may list several IPs; only the first, originating one is
/// reported.
fn first_of_list(value: &str) -> Option<String> {
    value
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn akamai_headers() -> RawHeaders {
        RawHeaders::from_pairs([
            ("X-Cache", "TCP_HIT from edge123.akamai.net (1)"),
            ("X-Check-Cacheable", "YES"),
            ("X-Cache-Key", "/L/www.example.com/abc123/1d/xyz/"),
            ("X-True-Cache-Key", "/L/www.example.com/def456/1d/xyz/"),
            ("X-Cache-Server", "23808"),
            ("X-Serial", "402"),
            ("X-Akamai-Request-ID", "1a2b3c4d"),
            ("X-Akamai-Pragma-Client-IP", "198.51.100.7, 203.0.113.9"),
            ("X-Origin-Server", "origin.example.com"),
            ("X-EdgeConnect-MidMile-RTT", "24"),
            ("X-EdgeConnect-Origin-MEX-Latency", "111"),
            ("Date", "Thu, 01 Jan 2026 12:00:00 GMT"),
            ("Content-Type", "text/html; charset=utf-8"),
            ("Content-Length", "5120"),
            ("Last-Modified", "Wed, 31 Dec 2025 00:00:00 GMT"),
            ("ETag", "\"abc123\""),
            ("Expires", "Thu, 01 Jan 2026 13:00:00 GMT"),
            ("Cache-Control", "public, max-age=3600"),
            ("Vary", "Accept-Encoding"),
            (
                "X-Akamai-Session-Info",
                "name=AKA_PM_PROPERTY_NAME; value=www.example.com, \
                 name=AKA_PM_PROPERTY_VERSION; value=42, \
                 name=AKA_PM_SR_ENABLED; value=true, \
                 name=AKA_PM_TD_ENABLED; value=false, \
                 name=PMUSER_CITY; value=AMSTERDAM, \
                 name=PMUSER_COUNTRY; value=NL",
            ),
        ])
    }

    #[test]
    fn test_extract_cache_status_and_hostname() {
        let record = extract(&akamai_headers());
        assert_eq!(record.cache_status, Field::Known("TCP_HIT".to_string()));
        assert_eq!(
            record.cache_server_hostname,
            Field::Known("edge123.akamai.net".to_string())
        );
    }

    #[test]
    fn test_extract_x_cache_without_from_marker() {
        let headers = RawHeaders::from_pairs([("X-Cache", "TCP_MISS")]);
        let record = extract(&headers);
        assert_eq!(record.cache_status, Field::Known("TCP_MISS".to_string()));
        assert_eq!(record.cache_server_hostname, Field::Unknown);
    }

    #[test]
    fn test_extract_client_ip_takes_first_of_chain() {
        let record = extract(&akamai_headers());
        assert_eq!(record.client_ip, Field::Known("198.51.100.7".to_string()));
    }

    #[test]
    fn test_extract_session_info_fields() {
        let record = extract(&akamai_headers());
        assert_eq!(
            record.property_name,
            Field::Known("www.example.com".to_string())
        );
        assert_eq!(record.property_version, Field::Known("42".to_string()));
        assert_eq!(record.sureroute_enabled, Field::Known("true".to_string()));
        assert_eq!(
            record.tiered_distribution_enabled,
            Field::Known("false".to_string())
        );
        assert_eq!(record.client_city, Field::Known("AMSTERDAM".to_string()));
        assert_eq!(record.client_country, Field::Known("NL".to_string()));
    }

    #[test]
    fn test_extract_network_defaults_to_production() {
        let record = extract(&akamai_headers());
        assert_eq!(record.akamai_network, AkamaiNetwork::Production);
    }

    #[test]
    fn test_extract_network_staging_on_essl_case_insensitive() {
        let headers = RawHeaders::from_pairs([("X-Akamai-Staging", "essl")]);
        let record = extract(&headers);
        assert_eq!(record.akamai_network, AkamaiNetwork::Staging);

        let headers = RawHeaders::from_pairs([("X-Akamai-Staging", "other")]);
        let record = extract(&headers);
        assert_eq!(record.akamai_network, AkamaiNetwork::Production);
    }

    #[test]
    fn test_extract_empty_map_is_all_unknown() {
        let record = extract(&RawHeaders::default());
        assert_eq!(record.cache_status, Field::Unknown);
        assert_eq!(record.cache_key, Field::Unknown);
        assert_eq!(record.request_id, Field::Unknown);
        assert_eq!(record.client_ip, Field::Unknown);
        assert_eq!(record.property_name, Field::Unknown);
        assert_eq!(record.akamai_network, AkamaiNetwork::Production);
        assert_eq!(record.origin_ttl_seconds, None);
        assert_eq!(record.cache_key_ttl, None);
    }

    #[test]
    fn test_extract_is_case_insensitive_on_header_names() {
        let headers = RawHeaders::from_pairs([("X-CACHE-KEY", "/L/a/b/30s/c/")]);
        let record = extract(&headers);
        assert_eq!(record.cache_key, Field::Known("/L/a/b/30s/c/".to_string()));
    }
}
