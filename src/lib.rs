//! dns_mapper library: DNS footprint mapping of a single domain
//!
//! This library maps the DNS footprint of a target domain: its A, MX, NS and
//! TXT record sets, the reverse names of its addresses, the resolving
//! neighbors of those addresses and the subdomains found in a candidate
//! dictionary. Every lookup failure is absorbed, so a scan always completes.
//!
//! # Example
//!
//! ```no_run
//! use dns_mapper::{run_scan, Config, NoopObserver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     neighbor_radius: 3,
//!     ..Config::new("example.com")
//! };
//!
//! let report = run_scan(config, Box::new(NoopObserver)).await?;
//! println!(
//!     "{} addresses, {} subdomains",
//!     report.result.records().a.len(),
//!     report.result.subdomains().len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
pub mod dns;
mod domain;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
pub mod scan;
pub mod sweep;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel, ReportFormat};
pub use dns::{DnsBackend, RecordKind, RecordValue, ResolverAdapter};
pub use domain::normalize_target;
pub use error_handling::{
    InitializationError, LookupError, LookupErrorKind, QueryStats, QueryStatsSnapshot, ReportError,
};
pub use models::{NeighborMap, RecordSets, ScanResult, ScanResultBuilder, SubdomainMap};
pub use run::{run_scan, scan_with_backend, ScanReport};
pub use scan::{NoopObserver, ScanObserver, ScanOptions, ScanPhase, Scanner};

// Internal run module (contains the top-level scan flow)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Instant;

    use crate::app::print_query_statistics;
    use crate::config::Config;
    use crate::dns::{DnsBackend, ResolverAdapter};
    use crate::domain::normalize_target;
    use crate::error_handling::{QueryStats, QueryStatsSnapshot};
    use crate::export::{write_report, ReportMetadata};
    use crate::initialization::init_backend;
    use crate::models::ScanResult;
    use crate::scan::{ScanObserver, ScanOptions, Scanner};

    /// Results of a completed scan.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// Everything the scan found
        pub result: ScanResult,
        /// Path of the written report file
        pub report_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Query counters at the end of the scan
        pub stats: QueryStatsSnapshot,
    }

    /// Runs a scan with the provided configuration.
    ///
    /// This is the main entry point for the library. It validates the target,
    /// builds the system resolver, maps the target and writes the report into
    /// `config.output_dir`.
    ///
    /// # Arguments
    ///
    /// * `config` - Target and tuning of the scan
    /// * `observer` - Receives progress while the scan runs
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a valid domain name or the report
    /// cannot be written. Lookup failures never fail a scan.
    pub async fn run_scan(config: Config, observer: Box<dyn ScanObserver>) -> Result<ScanReport> {
        let target = normalize_target(&config.target).context("Invalid scan target")?;
        let backend = init_backend(config.query_timeout());
        scan_with_backend(Config { target, ..config }, backend, observer).await
    }

    /// Runs a scan against an explicit DNS backend.
    ///
    /// The target is used as given; [`run_scan`] validates it first.
    pub async fn scan_with_backend(
        config: Config,
        backend: Arc<dyn DnsBackend>,
        observer: Box<dyn ScanObserver>,
    ) -> Result<ScanReport> {
        let start = Instant::now();
        let stats = Arc::new(QueryStats::new());
        let adapter = ResolverAdapter::new(backend, config.query_timeout())
            .with_stats(Arc::clone(&stats));

        info!(
            "Scanning {} (timeout {}s, neighbor radius {}, concurrency {})",
            config.target, config.timeout_seconds, config.neighbor_radius, config.concurrency
        );
        let result = Scanner::new(config.target.clone(), adapter, ScanOptions::from(&config))
            .with_observer(observer)
            .run()
            .await;

        let elapsed_seconds = start.elapsed().as_secs_f64();
        let snapshot = stats.snapshot();
        print_query_statistics(&snapshot);

        let metadata = ReportMetadata::new(elapsed_seconds, snapshot.clone());
        let format = config.report_format;
        let report_path = write_report(&result, &metadata, &config.output_dir, format)
            .context("Failed to write report")?;

        Ok(ScanReport {
            result,
            report_path,
            elapsed_seconds,
            stats: snapshot,
        })
    }
}
