//! Case-insensitive raw header map.

use std::collections::BTreeMap;

use reqwest::header::HeaderMap;

/// The raw response headers, keyed case-insensitively.
///
/// Header names are stored lowercase (HTTP header names are case-insensitive,
/// and reqwest already normalizes them). When the same header occurs
/// more than once — pathological proxies duplicate `Expires` or `Date` — the
/// first occurrence wins and later ones are dropped. Values are carried as
/// unparsed strings; non-UTF-8 bytes are replaced lossily rather than dropped
/// so a mangled value still shows up in the raw report.
#[derive(Debug, Clone, Default)]
pub struct RawHeaders {
    entries: BTreeMap<String, String>,
}

impl RawHeaders {
    /// Builds the map from a reqwest header map, first occurrence winning.
    pub fn from_reqwest(headers: &HeaderMap) -> Self {
        let mut entries = BTreeMap::new();
        for (name, value) in headers.iter() {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            entries
                .entry(name.as_str().to_ascii_lowercase())
                .or_insert(value);
        }
        Self { entries }
    }

    /// Builds the map from name/value pairs, first occurrence winning.
    ///
    /// Primarily for constructing header maps in tests without a live
    /// response.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (name, value) in pairs {
            entries
                .entry(name.as_ref().to_ascii_lowercase())
                .or_insert_with(|| value.into());
        }
        Self { entries }
    }

    /// Looks up a header value by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        if name.chars().any(|c| c.is_ascii_uppercase()) {
            self.entries.get(&name.to_ascii_lowercase()).map(String::as_str)
        } else {
            self.entries.get(name).map(String::as_str)
        }
    }

    /// Iterates over all headers, sorted by (lowercase) name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of distinct headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no headers were captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
