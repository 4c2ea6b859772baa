//! Presentation: narrative analysis and raw header reports.
//!
//! Renderers take an explicit `(writer, theme)` pair; nothing here touches
//! global state, so the same record can be rendered to stdout, a buffer in
//! tests, or a file.

mod analysis;
mod raw;
mod theme;

pub use analysis::render_analysis;
pub use raw::render_raw_headers;
pub use theme::Theme;
