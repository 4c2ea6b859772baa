//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, User-Agent, redirect cap)
//! - HTTP header name and session-info key constants
//! - Configuration types shared by the CLI and the library

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
