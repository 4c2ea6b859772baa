//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, LogFormat, LogLevel, DEFAULT_TIMEOUT_SECS};

/// Fetch a URL with Akamai debug Pragma headers and explain the edge
/// caching behavior.
#[derive(Debug, Parser)]
#[command(name = "edge_diag", version, about)]
pub struct Cli {
    /// Which report to produce
    #[command(subcommand)]
    pub command: Command,
}

/// The available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch with debug directives and print the narrative caching analysis
    Explain(ExplainArgs),
    /// Fetch with debug directives and print the categorized raw header dump
    Headers(HeadersArgs),
}

/// Arguments for the `explain` subcommand.
#[derive(Debug, Args)]
pub struct ExplainArgs {
    /// Shared fetch options
    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Print the analysis record as JSON instead of the narrative report
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `headers` subcommand.
#[derive(Debug, Args)]
pub struct HeadersArgs {
    /// Shared fetch options
    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Fetch options shared by both subcommands.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// The URL to diagnose (http or https)
    pub url: String,

    /// Request specific debug directive(s) instead of the full catalog
    #[arg(
        short = 'p',
        long = "pragma",
        value_name = "DIRECTIVE",
        num_args = 1..,
        conflicts_with = "no_default_pragma"
    )]
    pub pragma: Option<Vec<String>>,

    /// Send no debug directives at all (plain request)
    #[arg(long)]
    pub no_default_pragma: bool,

    /// Request timeout in seconds
    #[arg(short = 't', long, value_name = "SEC", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print request/redirect/response detail (shorthand for --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl FetchArgs {
    /// Converts the CLI arguments into the library configuration.
    pub fn to_config(&self) -> Config {
        let directives = if self.no_default_pragma {
            Some(Vec::new())
        } else {
            self.pragma.clone()
        };
        Config {
            url: self.url.clone(),
            directives,
            timeout_seconds: self.timeout_seconds,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            ..Config::default()
        }
    }

    /// The effective log filter: `--verbose` raises the level to debug.
    pub fn log_filter(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            self.log_level.clone().into()
        }
    }
}
