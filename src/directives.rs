//! Akamai debug Pragma directive catalog and directive sets.
//!
//! Akamai edge servers reveal diagnostic response headers only when asked:
//! the request carries a `Pragma` header whose value is a comma-joined list
//! of vendor debug directives. This module defines the known catalog and a
//! small ordered-set type for composing the request value.

use crate::error_handling::DirectiveSetError;

/// The full catalog of debug directives, in request order.
///
/// Each entry solicits a family of diagnostic response headers (cache
/// status, cache keys, request IDs, trace data). The final entry carries an
/// inline value and is joined into the `Pragma` header verbatim like the
/// rest.
pub const DIRECTIVE_CATALOG: &[&str] = &[
    "akamai-x-cache-on",
    "akamai-x-cache-remote-on",
    "akamai-x-check-cacheable",
    "akamai-x-get-cache-key",
    "akamai-x-get-extracted-values",
    "akamai-x-get-nonces",
    "akamai-x-get-request-id",
    "akamai-x-get-request-trace",
    "akamai-x-get-ssl-client-session-id",
    "akamai-x-get-true-cache-key",
    "akamai-x-serial-no",
    "akamai-x-feo-trace",
    "akamai-x-get-client-ip",
    "x-akamai-logging-mode: verbose",
];

/// An ordered set of debug directive names.
///
/// Preserves insertion order (the order directives are joined into the
/// `Pragma` value) and rejects duplicates at construction. An empty set
/// means "send no debug directives": the `Pragma` header is omitted
/// entirely and the response will carry few or no diagnostic headers.
#[derive(Debug, Clone, Default)]
pub struct DirectiveSet {
    names: Vec<String>,
}

impl DirectiveSet {
    /// Returns the full default catalog as a directive set.
    pub fn catalog() -> Self {
        Self {
            names: DIRECTIVE_CATALOG.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Returns an empty directive set (no `Pragma` header will be sent).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a directive set from explicit names, preserving their order.
    ///
    /// Names are taken verbatim; they are not checked against the catalog
    /// because Akamai accepts directives this tool does not know about.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveSetError::DuplicateDirective`] if the same name
    /// appears more than once.
    pub fn from_names<I, S>(names: I) -> Result<Self, DirectiveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.into();
            if set.names.contains(&name) {
                return Err(DirectiveSetError::DuplicateDirective(name));
            }
            set.names.push(name);
        }
        Ok(set)
    }

    /// Returns the directive names in request order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns true when no directives are set.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the number of directives in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Joins the directives into a single `Pragma` header value.
    ///
    /// The result is exactly the names joined with `,`, in order. Callers
    /// must not send a `Pragma` header at all for an empty set.
    pub fn as_pragma_value(&self) -> String {
        self.names.join(",")
    }
}
