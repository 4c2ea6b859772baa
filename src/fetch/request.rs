//! Diagnostic request assembly.

use log::debug;

use crate::directives::DirectiveSet;

/// Applies the debug directive set to a request builder.
///
/// A non-empty set becomes a single `Pragma` header with the comma-joined
/// directive names in their original order. An empty set adds nothing: the
/// header must be absent, not present-and-empty, or some edges echo back
/// warnings about an unparseable directive list.
pub(crate) fn apply_pragma(
    builder: reqwest::RequestBuilder,
    directives: &DirectiveSet,
) -> reqwest::RequestBuilder {
    if directives.is_empty() {
        return builder;
    }
    let value = directives.as_pragma_value();
    debug!("Pragma: {value}");
    builder.header(reqwest::header::PRAGMA, value)
}
