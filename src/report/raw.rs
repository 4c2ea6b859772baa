//! Raw header report.
//!
//! Prints the final status line and every response header, sorted by name
//! and styled by category. Composite headers that pack multiple records into
//! one comma-joined value are split onto indented continuation lines.

use std::io::{self, Write};

use crate::config::COMPOSITE_HEADERS;
use crate::fetch::RawHeaders;

use super::theme::Theme;

/// Renders the status line and the categorized header dump.
pub fn render_raw_headers<W: Write>(
    out: &mut W,
    theme: &Theme,
    status: u16,
    headers: &RawHeaders,
) -> io::Result<()> {
    writeln!(out, "- Status Code: {}", theme.status(status))?;

    for (name, value) in headers.iter() {
        if COMPOSITE_HEADERS.contains(&name) && value.contains(',') {
            writeln!(out, "{}:", theme.header_name(name))?;
            for part in value.split(',') {
                let part = part.trim();
                if !part.is_empty() {
                    writeln!(out, "  {}", theme.header_value(name, part))?;
                }
            }
        } else {
            writeln!(
                out,
                "{}: {}",
                theme.header_name(name),
                theme.header_value(name, value)
            )?;
        }
    }
    Ok(())
}
