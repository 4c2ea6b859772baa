//! Semantic analysis of the raw header map.
//!
//! [`extract`] maps the case-insensitive raw headers into a fixed
//! [`AnalysisRecord`]; [`resolve_ttl`] then annotates the record with the
//! effective cache TTL and its provenance. Both are pure and never fail:
//! parse anomalies surface only as `unknown` fields.

mod extract;
mod record;
mod ttl;

pub use extract::extract;
pub use record::{AkamaiNetwork, AnalysisRecord, Field};
pub use ttl::{format_ttl, resolve_ttl};
