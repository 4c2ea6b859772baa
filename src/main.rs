//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `edge_diag` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Report rendering to stdout
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use edge_diag::analysis::AnalysisRecord;
use edge_diag::cli::{Cli, Command};
use edge_diag::initialization::{init_crypto_provider, init_logger_with};
use edge_diag::report::{render_analysis, render_raw_headers, Theme};
use edge_diag::run_diagnosis;

/// Shape of the `--json` output: final status plus the analysis record.
#[derive(Serialize)]
struct JsonReport<'a> {
    status: u16,
    analysis: &'a AnalysisRecord,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let fetch = match &cli.command {
        Command::Explain(args) => &args.fetch,
        Command::Headers(args) => &args.fetch,
    };

    init_logger_with(fetch.log_filter(), fetch.log_format.clone())
        .context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    let theme = Theme::new(!fetch.no_color);
    let config = fetch.to_config();

    match run_diagnosis(&config).await {
        Ok(diagnosis) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match &cli.command {
                Command::Explain(args) if args.json => {
                    let report = JsonReport {
                        status: diagnosis.status,
                        analysis: &diagnosis.record,
                    };
                    let json = serde_json::to_string_pretty(&report)
                        .context("Failed to serialize analysis")?;
                    writeln!(out, "{json}")?;
                }
                Command::Explain(_) => {
                    render_analysis(&mut out, &theme, diagnosis.status, &diagnosis.record)?;
                }
                Command::Headers(_) => {
                    render_raw_headers(&mut out, &theme, diagnosis.status, &diagnosis.headers)?;
                }
            }
            // An error status was still analyzed, but scripts get exit 1
            if diagnosis.is_http_error() {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("edge_diag error: {e:#}");
            process::exit(1);
        }
    }
}
