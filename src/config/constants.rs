//! Configuration constants.
//!
//! This module defines the operational constants used throughout the
//! application: timeouts, redirect caps, and the identifying User-Agent.

/// User-Agent sent with every diagnostic request.
///
/// Akamai logs the agent alongside the debug Pragma directives, so a stable,
/// identifying value makes the tool's traffic easy to recognize in edge logs.
pub const USER_AGENT: &str = concat!("edge_diag/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout in seconds.
///
/// Covers the whole request including redirects. Overridable via the
/// `--timeout-seconds` CLI flag.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds.
///
/// Separate from the global timeout so an unreachable host fails fast
/// instead of consuming the entire request budget.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum number of redirect hops to follow.
///
/// Prevents infinite redirect loops. The chain itself is only logged; the
/// caller observes the final status and headers.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum accepted URL length in characters.
///
/// Matches common browser and server limits; anything longer is rejected
/// before any network I/O.
pub const MAX_URL_LENGTH: usize = 2048;
