//! Explicit color theme for report rendering.
//!
//! Styling is a capability passed to the renderers, not process-global
//! state: analysis stays pure, rendering writes to a caller-supplied sink,
//! and the theme decides per call whether color escapes are emitted.

use colored::{Color, Colorize};

/// Header category, used to pick a color pair in the raw header report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderCategory {
    XCache,
    AkamaiDebug,
    Caching,
    Cookie,
    Content,
    Security,
    Redirect,
    Default,
}

fn categorize(name: &str) -> HeaderCategory {
    if name.starts_with("x-cache") {
        HeaderCategory::XCache
    } else if name.starts_with("x-akamai-")
        || name.starts_with("x-feo")
        || name == "x-serial"
        || name == "x-check-cacheable"
    {
        HeaderCategory::AkamaiDebug
    } else if matches!(
        name,
        "cache-control" | "pragma" | "expires" | "age" | "vary" | "etag" | "last-modified"
    ) {
        HeaderCategory::Caching
    } else if name == "set-cookie" {
        HeaderCategory::Cookie
    } else if name.starts_with("content-") {
        HeaderCategory::Content
    } else if matches!(
        name,
        "strict-transport-security"
            | "content-security-policy"
            | "x-frame-options"
            | "x-content-type-options"
            | "x-xss-protection"
            | "referrer-policy"
            | "permissions-policy"
    ) {
        HeaderCategory::Security
    } else if name == "location" {
        HeaderCategory::Redirect
    } else {
        HeaderCategory::Default
    }
}

fn category_color(category: HeaderCategory) -> Color {
    match category {
        HeaderCategory::XCache => Color::BrightMagenta,
        HeaderCategory::AkamaiDebug => Color::BrightCyan,
        HeaderCategory::Caching => Color::BrightGreen,
        HeaderCategory::Cookie => Color::Magenta,
        HeaderCategory::Content => Color::BrightYellow,
        HeaderCategory::Security => Color::BrightRed,
        HeaderCategory::Redirect => Color::BrightBlue,
        HeaderCategory::Default => Color::White,
    }
}

/// Rendering theme: colors on or off.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    color: bool,
}

impl Theme {
    /// Builds a theme. `color: false` emits plain text with no escapes.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Styles a section heading.
    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.magenta().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Styles an extracted variable value.
    ///
    /// Unknown sentinels are dimmed so the eye skips them; concrete values
    /// are highlighted.
    pub fn value(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        if text == "unknown" || text == "Unknown" {
            text.dimmed().to_string()
        } else {
            text.magenta().bold().to_string()
        }
    }

    /// Styles an HTTP status code by its class.
    ///
    /// 2xx green, 3xx blue, 4xx yellow, 5xx red.
    pub fn status(&self, status: u16) -> String {
        let text = status.to_string();
        if !self.color {
            return text;
        }
        match status {
            200..=299 => text.green().to_string(),
            300..=399 => text.blue().to_string(),
            400..=499 => text.yellow().to_string(),
            _ => text.red().to_string(),
        }
    }

    /// Styles a raw header name by its category (lowercase name expected).
    pub fn header_name(&self, name: &str) -> String {
        if !self.color {
            return name.to_string();
        }
        name.color(category_color(categorize(name)))
            .bold()
            .dimmed()
            .to_string()
    }

    /// Styles a raw header value by its header's category.
    pub fn header_value(&self, name: &str, value: &str) -> String {
        if !self.color {
            return value.to_string();
        }
        value
            .color(category_color(categorize(name)))
            .to_string()
    }
}
