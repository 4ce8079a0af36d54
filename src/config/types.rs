//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_NEIGHBOR_RADIUS, DEFAULT_SWEEP_CONCURRENCY, DNS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format of the generated report document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Markdown document with one section per finding category
    Markdown,
    /// Pretty-printed JSON document
    Json,
}

impl ReportFormat {
    /// File extension (without the dot) used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through [`Cli`].
///
/// # Examples
///
/// ```no_run
/// use dns_mapper::Config;
///
/// let config = Config {
///     neighbor_radius: 2,
///     concurrency: 4,
///     ..Config::new("example.com")
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain name to map
    pub target: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-query timeout in seconds
    pub timeout_seconds: u64,

    /// Radius of the neighbor sweep around each discovered address
    pub neighbor_radius: u32,

    /// Maximum number of sweep queries in flight
    pub concurrency: usize,

    /// Optional deadline for the whole scan, in seconds
    pub deadline_seconds: Option<u64>,

    /// Directory the report is written to
    pub output_dir: PathBuf,

    /// Report document format
    pub report_format: ReportFormat,

    /// Suppress console progress output
    pub quiet: bool,
}

impl Config {
    /// Creates a configuration with default settings for `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    /// Per-query timeout as a [`Duration`].
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Whole-scan deadline as a [`Duration`], if one is configured.
    pub fn scan_deadline(&self) -> Option<Duration> {
        self.deadline_seconds.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DNS_TIMEOUT_SECS,
            neighbor_radius: DEFAULT_NEIGHBOR_RADIUS,
            concurrency: DEFAULT_SWEEP_CONCURRENCY,
            deadline_seconds: None,
            output_dir: PathBuf::from("."),
            report_format: ReportFormat::Markdown,
            quiet: false,
        }
    }
}

/// Command-line interface of the `dns_mapper` binary.
#[derive(Debug, Parser)]
#[command(
    name = "dns_mapper",
    version,
    about = "Map the public DNS footprint of a domain",
    after_help = "Example:\n  dns_mapper example.com"
)]
pub struct Cli {
    /// Domain name to analyse
    pub domain: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    #[arg(
        long,
        default_value_t = DNS_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_seconds: u64,

    /// Radius of the neighbor sweep around each discovered address
    #[arg(long, default_value_t = DEFAULT_NEIGHBOR_RADIUS)]
    pub neighbor_radius: u32,

    /// Maximum number of sweep queries in flight
    #[arg(long, default_value_t = DEFAULT_SWEEP_CONCURRENCY)]
    pub concurrency: usize,

    /// Stop sweeping after this many seconds and report what was found
    #[arg(long)]
    pub deadline_seconds: Option<u64>,

    /// Directory the report is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Report format
    #[arg(long = "format", value_enum, default_value_t = ReportFormat::Markdown)]
    pub report_format: ReportFormat,

    /// Do not print progress to the console
    #[arg(long, short)]
    pub quiet: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            target: cli.domain,
            log_level: cli.log_level,
            log_format: cli.log_format,
            timeout_seconds: cli.timeout_seconds,
            neighbor_radius: cli.neighbor_radius,
            // A zero-sized pool would never make progress
            concurrency: cli.concurrency.max(1),
            deadline_seconds: cli.deadline_seconds,
            output_dir: cli.output_dir,
            report_format: cli.report_format,
            quiet: cli.quiet,
        }
    }
}
