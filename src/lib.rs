//! edge_diag library: Akamai edge-cache diagnostics
//!
//! This library fetches a URL with Akamai debug Pragma directives attached
//! and derives a structured explanation of the edge caching behavior from
//! the response headers: cache status, TTL provenance, edge routing, and
//! request processing metadata.
//!
//! # Example
//!
//! ```no_run
//! use edge_diag::{run_diagnosis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://www.example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let diagnosis = run_diagnosis(&config).await?;
//! println!("status {} cache status {}",
//!          diagnosis.status, diagnosis.record.cache_status);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod analysis;
mod app;
pub mod cli;
pub mod config;
pub mod directives;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod parse;
pub mod report;

// Re-export public API
pub use app::validate_url;
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_diagnosis, Diagnosis};

// Internal run module (contains the diagnosis orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::warn;

    use crate::analysis::{extract, resolve_ttl, AnalysisRecord};
    use crate::app::validate_url;
    use crate::config::Config;
    use crate::directives::DirectiveSet;
    use crate::fetch::{fetch_edge_headers, FetchOutcome, RawHeaders};
    use crate::initialization::init_client;

    /// The result of one diagnostic fetch-and-analyze pass.
    #[derive(Debug)]
    pub struct Diagnosis {
        /// Final HTTP status code
        pub status: u16,
        /// The raw response headers, for the raw report
        pub headers: RawHeaders,
        /// The annotated analysis record
        pub record: AnalysisRecord,
    }

    impl Diagnosis {
        /// True when the final status was an HTTP error (>= 400).
        ///
        /// The record is fully populated either way; this only drives the
        /// caller's exit code.
        pub fn is_http_error(&self) -> bool {
            self.status >= 400
        }
    }

    /// Runs one diagnosis: validate, fetch once, extract, resolve TTL.
    ///
    /// An HTTP error status is not an `Err` — its headers are analyzed like
    /// any other response. Only invalid input and terminal transport
    /// failures (timeout, TLS, connection) return an error, because those
    /// produce no headers to analyze.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid URL, a rejected directive list, a
    /// client initialization failure, or a transport failure.
    pub async fn run_diagnosis(config: &Config) -> Result<Diagnosis> {
        let url = validate_url(&config.url)?;

        let directives = match &config.directives {
            Some(names) => DirectiveSet::from_names(names.iter().cloned())?,
            None => DirectiveSet::catalog(),
        };

        let client = init_client(config.timeout_seconds, &config.user_agent)
            .context("Failed to initialize HTTP client")?;

        match fetch_edge_headers(&client, &url, &directives).await {
            FetchOutcome::Success { status, headers }
            | FetchOutcome::HttpError { status, headers } => {
                if status >= 400 {
                    warn!("HTTP {status} for {url}; analyzing error response headers");
                }
                let mut record = extract(&headers);
                resolve_ttl(&mut record);
                Ok(Diagnosis {
                    status,
                    headers,
                    record,
                })
            }
            FetchOutcome::Failure(error) => {
                Err(error).with_context(|| format!("request to {url} failed"))
            }
        }
    }
}
