//! Narrative analysis rendering.
//!
//! Turns the analysis record into five labeled sections with per-status
//! explanation sentences. The cache-status explanations are domain
//! knowledge: each sentence states what the edge actually did, in the same
//! meaning the vendor documents for the status token.

use std::io::{self, Write};

use crate::analysis::{format_ttl, AnalysisRecord, Field};
use crate::parse::{max_age, s_maxage};

use super::theme::Theme;

/// Renders the full narrative analysis to the given sink.
pub fn render_analysis<W: Write>(
    out: &mut W,
    theme: &Theme,
    status: u16,
    record: &AnalysisRecord,
) -> io::Result<()> {
    writeln!(
        out,
        "Edge responded with status: {}",
        theme.status(status)
    )?;

    render_caching_behavior(out, theme, record)?;
    render_processing(out, theme, record)?;
    render_connection(out, theme, record)?;
    render_timing(out, theme, record)?;
    render_content(out, theme, record)?;
    Ok(())
}

fn value_of(field: &Field, theme: &Theme) -> String {
    theme.value(&field.to_string())
}

fn render_caching_behavior<W: Write>(
    out: &mut W,
    theme: &Theme,
    record: &AnalysisRecord,
) -> io::Result<()> {
    writeln!(out, "\n{}", theme.heading("1. Caching Behavior"))?;

    let status = record.cache_status.as_known().unwrap_or("unknown");
    let server = value_of(&record.cache_server_hostname, theme);
    let server_id = value_of(&record.edge_server_id, theme);
    let styled_status = theme.value(status);

    let explanation = match status {
        "TCP_HIT" | "TCP_MEM_HIT" => format!(
            "{styled_status} (Served from Akamai edge server {server} ID: {server_id})"
        ),
        "TCP_MISS" => {
            format!("{styled_status} (Akamai fetched content from the origin server)")
        }
        "TCP_REFRESH_HIT" => format!(
            "{styled_status} (Akamai revalidated its cached copy with the origin; origin \
             confirmed it was still valid. Served cached copy from {server} ID: {server_id})"
        ),
        "TCP_REFRESH_MISS" => format!(
            "{styled_status} (Akamai revalidated its cached copy with the origin; origin \
             sent updated content, which was served)"
        ),
        "TCP_CLIENT_REFRESH_MISS" => format!(
            "{styled_status} (Client requested a fresh copy, Akamai fetched from origin)"
        ),
        "unknown" => theme.value("Unknown"),
        _ => format!("{styled_status} (Served from {server} ID: {server_id})"),
    };
    writeln!(out, "  Cache Status: {explanation}")?;

    let cacheability = match record.cacheability.as_known() {
        Some("YES") => format!(
            "{} (Akamai determined this content could be cached)",
            theme.value("YES")
        ),
        Some("NO") => format!(
            "{} (Akamai determined this content should not be cached)",
            theme.value("NO")
        ),
        _ => theme.value("Unknown"),
    };
    writeln!(out, "  Cacheability: {cacheability}")?;

    if let Some(token) = &record.cache_key_ttl {
        writeln!(
            out,
            "  Cache TTL: {} (According to Akamai's cache key)",
            theme.value(token)
        )?;
    } else if record.origin_ttl_seconds.is_some() {
        writeln!(
            out,
            "  Cache TTL: {} (According to origin's {} header)",
            theme.value(&format_ttl(record.origin_ttl_seconds)),
            theme.value(&record.origin_ttl_source.to_string())
        )?;
    } else {
        writeln!(out, "  Cache TTL: {}", theme.value("Unknown"))?;
    }

    // Prefer the working cache key; fall back to the untransformed one
    let display_key = if record.cache_key.is_known() {
        &record.cache_key
    } else {
        &record.true_cache_key
    };
    if display_key.is_known() {
        writeln!(out, "  Cache Key: {}", value_of(display_key, theme))?;
    }

    if let Some(cc) = record.cache_control.as_known() {
        writeln!(out, "  Cache-Control Raw: {}", theme.value(cc))?;
        render_cache_control_explanation(out, theme, cc)?;
    }
    Ok(())
}

/// Explains the Cache-Control directive set in prose.
fn render_cache_control_explanation<W: Write>(
    out: &mut W,
    theme: &Theme,
    cache_control: &str,
) -> io::Result<()> {
    use crate::parse::has_directive;

    let mut parts: Vec<String> = Vec::new();
    if has_directive(cache_control, "public") {
        parts.push("Public (can be stored by any cache)".to_string());
    }
    if has_directive(cache_control, "private") {
        parts.push("Private (intended for single user, not shared caches)".to_string());
    }
    if has_directive(cache_control, "no-cache") {
        parts.push("No-Cache (cache must revalidate with origin before using)".to_string());
    }
    if has_directive(cache_control, "no-store") {
        parts.push("No-Store (cannot be cached anywhere)".to_string());
    }
    if has_directive(cache_control, "must-revalidate") {
        parts.push("Must-Revalidate (cache must revalidate once stale)".to_string());
    }
    if let Some(secs) = max_age(cache_control) {
        parts.push(format!(
            "Max-Age (browser TTL): {}",
            theme.value(&format_ttl(Some(secs)))
        ));
    }
    if let Some(secs) = s_maxage(cache_control) {
        parts.push(format!(
            "S-Maxage (shared cache TTL): {}",
            theme.value(&format_ttl(Some(secs)))
        ));
    }

    if parts.is_empty() {
        writeln!(
            out,
            "  Explanation: Contains directives: {}",
            theme.value(cache_control)
        )
    } else {
        writeln!(out, "  Explanation: {}", parts.join("; "))
    }
}

fn render_processing<W: Write>(
    out: &mut W,
    theme: &Theme,
    record: &AnalysisRecord,
) -> io::Result<()> {
    writeln!(out, "\n{}", theme.heading("2. Akamai Processing"))?;
    writeln!(out, "  Request ID: {}", value_of(&record.request_id, theme))?;
    writeln!(
        out,
        "  Network: {}",
        theme.value(&record.akamai_network.to_string())
    )?;

    if let Some(name) = record.property_name.as_known() {
        writeln!(
            out,
            "  Configuration: '{}' version {}",
            theme.value(name),
            value_of(&record.property_version, theme)
        )?;
    } else {
        writeln!(out, "  Configuration: {}", theme.value("Unknown"))?;
    }

    if let Some(serial) = record.serial_number.as_known() {
        writeln!(out, "  Config Serial: {}", theme.value(serial))?;
    }

    let sureroute = match record.sureroute_enabled.as_known() {
        Some("true") => format!(
            "{} (Akamai optimized the path to origin)",
            theme.value("Enabled")
        ),
        Some("false") => theme.value("Disabled"),
        _ => theme.value("Unknown"),
    };
    writeln!(out, "  SureRoute: {sureroute}")?;

    match record.tiered_distribution_enabled.as_known() {
        Some("true") => writeln!(
            out,
            "  Tiered Distribution: {} (edge fetched through a parent cache tier)",
            theme.value("Enabled")
        )?,
        Some("false") => writeln!(out, "  Tiered Distribution: {}", theme.value("Disabled"))?,
        _ => {}
    }
    Ok(())
}

fn render_connection<W: Write>(
    out: &mut W,
    theme: &Theme,
    record: &AnalysisRecord,
) -> io::Result<()> {
    writeln!(out, "\n{}", theme.heading("3. Connection Details"))?;
    writeln!(
        out,
        "  Client IP: {} (Geo-located near: {}, {})",
        value_of(&record.client_ip, theme),
        value_of(&record.client_city, theme),
        value_of(&record.client_country, theme)
    )?;
    writeln!(
        out,
        "  Origin Server: {}",
        value_of(&record.origin_server, theme)
    )?;
    Ok(())
}

fn render_timing<W: Write>(
    out: &mut W,
    theme: &Theme,
    record: &AnalysisRecord,
) -> io::Result<()> {
    writeln!(out, "\n{}", theme.heading("4. Network Timing"))?;
    let mut parts: Vec<String> = Vec::new();
    if let Some(rtt) = record.midmile_rtt.as_known() {
        parts.push(format!("MidMile RTT: {} ms", theme.value(rtt)));
    }
    if let Some(latency) = record.origin_latency.as_known() {
        parts.push(format!("Origin Latency: {} ms", theme.value(latency)));
    }
    if parts.is_empty() {
        writeln!(out, "  {}", theme.value("Timing data not available"))
    } else {
        writeln!(out, "  {}", parts.join(" | "))
    }
}

fn render_content<W: Write>(
    out: &mut W,
    theme: &Theme,
    record: &AnalysisRecord,
) -> io::Result<()> {
    writeln!(out, "\n{}", theme.heading("5. Delivered Content Info"))?;
    let mut parts: Vec<String> = Vec::new();
    if let Some(ctype) = record.content_type.as_known() {
        let bare = ctype.split(';').next().unwrap_or(ctype);
        parts.push(format!("Type: '{}'", theme.value(bare)));
    }
    if let Some(length) = record.content_length.as_known() {
        parts.push(format!("Size: {} bytes", theme.value(length)));
    }
    if let Some(modified) = record.last_modified.as_known() {
        parts.push(format!("Last Modified: {}", theme.value(modified)));
    }
    if parts.is_empty() {
        writeln!(out, "  {}", theme.value("Metadata not available"))
    } else {
        writeln!(out, "  {}", parts.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{extract, resolve_ttl};
    use crate::fetch::RawHeaders;

    fn render_plain(headers: RawHeaders, status: u16) -> String {
        let mut record = extract(&headers);
        resolve_ttl(&mut record);
        let mut buf = Vec::new();
        render_analysis(&mut buf, &Theme::new(false), status, &record)
            .expect("rendering to a Vec never fails");
        String::from_utf8(buf).expect("report is UTF-8")
    }

    #[test]
    fn test_hit_explanation_names_edge_server() {
        let output = render_plain(
            RawHeaders::from_pairs([
                ("X-Cache", "TCP_HIT from edge123.akamai.net (1)"),
                ("X-Cache-Server", "23808"),
            ]),
            200,
        );
        assert!(output.contains("Cache Status: TCP_HIT"));
        assert!(output.contains("Served from Akamai edge server edge123.akamai.net"));
        assert!(output.contains("ID: 23808"));
    }

    #[test]
    fn test_miss_explanation() {
        let output = render_plain(RawHeaders::from_pairs([("X-Cache", "TCP_MISS")]), 200);
        assert!(output.contains("TCP_MISS (Akamai fetched content from the origin server)"));
    }

    #[test]
    fn test_refresh_statuses_have_distinct_explanations() {
        let hit = render_plain(
            RawHeaders::from_pairs([("X-Cache", "TCP_REFRESH_HIT from e1.net")]),
            200,
        );
        assert!(hit.contains("origin confirmed it was still valid"));

        let miss = render_plain(
            RawHeaders::from_pairs([("X-Cache", "TCP_REFRESH_MISS from e1.net")]),
            200,
        );
        assert!(miss.contains("origin sent updated content"));

        let client = render_plain(
            RawHeaders::from_pairs([("X-Cache", "TCP_CLIENT_REFRESH_MISS from e1.net")]),
            200,
        );
        assert!(client.contains("Client requested a fresh copy"));
    }

    #[test]
    fn test_unknown_status_renders_unknown() {
        let output = render_plain(RawHeaders::default(), 200);
        assert!(output.contains("Cache Status: Unknown"));
        assert!(output.contains("Cacheability: Unknown"));
        assert!(output.contains("Cache TTL: Unknown"));
        assert!(output.contains("Timing data not available"));
        assert!(output.contains("Metadata not available"));
    }

    #[test]
    fn test_cache_key_ttl_preferred_in_ttl_line() {
        let output = render_plain(
            RawHeaders::from_pairs([
                ("X-Cache-Key", "/L/www.example.com/abc/1d/x/"),
                ("Cache-Control", "max-age=30"),
            ]),
            200,
        );
        assert!(output.contains("Cache TTL: 1d (According to Akamai's cache key)"));
    }

    #[test]
    fn test_origin_ttl_line_labels_source() {
        let output = render_plain(
            RawHeaders::from_pairs([("Cache-Control", "s-maxage=7200")]),
            200,
        );
        assert!(output.contains("Cache TTL: 2 hours (According to origin's s-maxage header)"));
    }

    #[test]
    fn test_cache_control_explanation_prose() {
        let output = render_plain(
            RawHeaders::from_pairs([("Cache-Control", "public, max-age=120, must-revalidate")]),
            200,
        );
        assert!(output.contains("Cache-Control Raw: public, max-age=120, must-revalidate"));
        assert!(output.contains("Public (can be stored by any cache)"));
        assert!(output.contains("Must-Revalidate (cache must revalidate once stale)"));
        assert!(output.contains("Max-Age (browser TTL): 2 minutes"));
    }

    #[test]
    fn test_unrecognized_cache_control_falls_back_to_raw_listing() {
        let output = render_plain(
            RawHeaders::from_pairs([("Cache-Control", "stale-while-revalidate=30")]),
            200,
        );
        assert!(output.contains("Contains directives: stale-while-revalidate=30"));
    }

    #[test]
    fn test_status_line_present_for_errors_too() {
        let output = render_plain(RawHeaders::default(), 404);
        assert!(output.contains("Edge responded with status: 404"));
    }

    #[test]
    fn test_content_section_splits_type_parameters() {
        let output = render_plain(
            RawHeaders::from_pairs([
                ("Content-Type", "text/html; charset=utf-8"),
                ("Content-Length", "5120"),
            ]),
            200,
        );
        assert!(output.contains("Type: 'text/html'"));
        assert!(output.contains("Size: 5120 bytes"));
    }
}
