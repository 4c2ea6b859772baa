//! Composite field parsers for vendor header grammars.
//!
//! Each Akamai composite header gets its own small parser with a documented,
//! best-effort contract: the grammars are informal and vendor-defined, so
//! malformed input is skipped or resolved to an unknown, never raised as an
//! error. A diagnostic tool must degrade gracefully on a vendor quirk rather
//! than abort.

mod cache_control;
mod cache_key;
mod origin_ttl;
mod session_info;

pub use cache_control::{has_directive, max_age, s_maxage};
pub use cache_key::extract_cache_key_ttl;
pub use origin_ttl::{resolve_origin_ttl, OriginTtl, TtlSource};
pub use session_info::parse_session_info;
