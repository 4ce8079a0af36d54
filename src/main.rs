//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_mapper` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_mapper::app::{print_statistics_table, ConsoleObserver};
use dns_mapper::initialization::init_logger_with;
use dns_mapper::{run_scan, Cli, Config, NoopObserver, ScanObserver};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing or malformed arguments exit here with clap's usage message
    let config = Config::from(Cli::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let quiet = config.quiet;
    let observer: Box<dyn ScanObserver> = if quiet {
        Box::new(NoopObserver)
    } else {
        Box::new(ConsoleObserver::new(config.target.clone()))
    };

    match run_scan(config, observer).await {
        Ok(report) => {
            if !quiet {
                print_statistics_table(&report.stats);
            }
            let result = &report.result;
            let addresses = result.records().a.len();
            let neighbors = result.neighbor_count();
            let subdomains = result.subdomains().len();
            println!(
                "Mapped {} in {:.1}s: {} address{}, {} neighbor{}, {} subdomain{} ({} queries)",
                result.target(),
                report.elapsed_seconds,
                addresses,
                if addresses == 1 { "" } else { "es" },
                neighbors,
                if neighbors == 1 { "" } else { "s" },
                subdomains,
                if subdomains == 1 { "" } else { "s" },
                report.stats.queries
            );
            println!("Report saved in {}", report.report_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_mapper error: {:#}", e);
            process::exit(1);
        }
    }
}
