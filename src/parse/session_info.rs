//! `X-Akamai-Session-Info` blob parser.
//!
//! The header value is a comma-joined list of segments, each nominally of
//! the form `name=<KEY>; value=<VALUE>[; full_location_id=<...>]`. The
//! grammar is vendor-defined and informal; this parser is best-effort and
//! never fails.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

use crate::config::SESSION_KEY_UA_IDENTIFIER;

/// Parses an `X-Akamai-Session-Info` value into a key/value map.
///
/// Splits the blob on `,` into candidate segments. A segment is accepted
/// only if it contains both the literal `name=` and `; value=`; everything
/// else is silently skipped. The value is truncated at a trailing
/// `; full_location_id=` marker when present. `UA_IDENTIFIER` values arrive
/// percent-encoded and are decoded; a decode failure keeps the raw value
/// rather than dropping the pair.
///
/// An empty input yields an empty map. Re-parsing the same blob yields the
/// same map, and a later duplicate of a key overwrites the earlier one (the
/// edge emits each key once in practice).
pub fn parse_session_info(value: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for segment in value.split(',') {
        if !segment.contains("name=") {
            continue;
        }
        let Some((name_part, value_part)) = segment.split_once("; value=") else {
            continue;
        };
        let name = name_part.replacen("name=", "", 1).trim().to_string();
        let mut val = value_part.trim();
        if let Some((head, _)) = val.split_once("; full_location_id=") {
            val = head;
        }
        let val = if name == SESSION_KEY_UA_IDENTIFIER {
            match percent_decode_str(val).decode_utf8() {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => val.to_string(),
            }
        } else {
            val.to_string()
        };
        map.insert(name, val);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "name=AKA_PM_PROPERTY_NAME; value=www.example.com, \
                          name=AKA_PM_PROPERTY_VERSION; value=42, \
                          name=AKA_PM_SR_ENABLED; value=true, \
                          name=PMUSER_CITY; value=AMSTERDAM; full_location_id=12345";

    #[test]
    fn test_parses_name_value_pairs() {
        let map = parse_session_info(SAMPLE);
        assert_eq!(
            map.get("AKA_PM_PROPERTY_NAME").map(String::as_str),
            Some("www.example.com")
        );
        assert_eq!(
            map.get("AKA_PM_PROPERTY_VERSION").map(String::as_str),
            Some("42")
        );
        assert_eq!(map.get("AKA_PM_SR_ENABLED").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_truncates_full_location_id_suffix() {
        let map = parse_session_info(SAMPLE);
        assert_eq!(map.get("PMUSER_CITY").map(String::as_str), Some("AMSTERDAM"));
    }

    #[test]
    fn test_percent_decodes_ua_identifier() {
        let map = parse_session_info("name=UA_IDENTIFIER; value=Mozilla%2F5.0%20(X11)");
        assert_eq!(
            map.get("UA_IDENTIFIER").map(String::as_str),
            Some("Mozilla/5.0 (X11)")
        );
    }

    #[test]
    fn test_invalid_percent_encoding_keeps_raw_value() {
        // %FF is not valid UTF-8 after decoding; the raw value must survive
        let map = parse_session_info("name=UA_IDENTIFIER; value=bad%FFencoding");
        assert_eq!(
            map.get("UA_IDENTIFIER").map(String::as_str),
            Some("bad%FFencoding")
        );
    }

    #[test]
    fn test_malformed_segments_are_skipped() {
        let map = parse_session_info(
            "garbage, name=ONLY_NAME_NO_VALUE, value=ONLY_VALUE, \
             name=GOOD; value=yes",
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("GOOD").map(String::as_str), Some("yes"));
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        assert!(parse_session_info("").is_empty());
    }

    #[test]
    fn test_reparsing_is_idempotent() {
        assert_eq!(parse_session_info(SAMPLE), parse_session_info(SAMPLE));
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_never_panics_on_arbitrary_input(input in ".{0,500}") {
            let _ = parse_session_info(&input);
        }

        #[test]
        fn test_well_formed_pair_roundtrips(
            key in "[A-Z_]{1,30}",
            value in "[a-zA-Z0-9./-]{0,40}",
        ) {
            prop_assume!(key != "UA_IDENTIFIER");
            let blob = format!("name={key}; value={value}");
            let map = parse_session_info(&blob);
            prop_assert_eq!(map.get(&key).map(String::as_str), Some(value.as_str()));
        }
    }
}
