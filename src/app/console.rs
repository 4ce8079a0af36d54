//! Human-readable progress output on stdout.

use std::net::Ipv4Addr;

use colored::Colorize;

use crate::config::MAX_TXT_DISPLAY_CHARS;
use crate::dns::RecordKind;
use crate::error_handling::QueryStatsSnapshot;
use crate::models::{NeighborMap, SubdomainMap};
use crate::scan::{ScanObserver, ScanPhase};

const SEPARATOR_WIDTH: usize = 60;

/// Shortens `value` to at most `max_chars` characters, appending `...` when cut.
///
/// Counts characters rather than bytes, so multi-byte text is never split.
pub fn truncate_for_display(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &value[..end]),
        None => value.to_string(),
    }
}

/// Prints scan progress as it happens.
pub struct ConsoleObserver {
    target: String,
}

impl ConsoleObserver {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl ScanObserver for ConsoleObserver {
    fn phase_changed(&self, phase: ScanPhase) {
        match phase {
            ScanPhase::ResolvingRecords => {
                println!("Scanning {}...\n", self.target.bold());
                println!("{}", "=".repeat(SEPARATOR_WIDTH));
            }
            ScanPhase::ResolvingReverseAndNeighbors => {
                println!("\nResolving reverse names and neighbors...");
            }
            ScanPhase::EnumeratingSubdomains => {
                println!("\nEnumerating subdomains...");
            }
            ScanPhase::Complete => {
                println!("\n{}", "=".repeat(SEPARATOR_WIDTH));
                println!("{}\n", "Scan complete!".green().bold());
            }
            ScanPhase::Idle => {}
        }
    }

    fn record_set(&self, kind: RecordKind, values: &[String]) {
        println!("\nResolving {} ({} records)...", kind.description(), kind);
        if values.is_empty() {
            println!("  {} No {} found", "✗".red(), kind.description());
            return;
        }
        println!(
            "{} Found {} {}:",
            "✓".green(),
            values.len(),
            kind.description()
        );
        for value in values {
            let shown = if kind == RecordKind::Txt {
                truncate_for_display(value, MAX_TXT_DISPLAY_CHARS)
            } else {
                value.clone()
            };
            println!("  • {shown}");
        }
    }

    fn canonical_name(&self, address: Ipv4Addr, name: &str) {
        println!("  ↳ PTR: {} → {}", address, name.cyan());
    }

    fn neighbors(&self, base: Ipv4Addr, found: &NeighborMap) {
        if found.is_empty() {
            println!("  {} No resolving neighbors around {}", "✗".red(), base);
            return;
        }
        println!(
            "{} Found {} resolving neighbor(s) around {}:",
            "✓".green(),
            found.len(),
            base
        );
        for (address, names) in found {
            println!("  • {} → {}", address, names.join(", "));
        }
    }

    fn subdomains(&self, found: &SubdomainMap) {
        if found.is_empty() {
            println!("  {} No candidate subdomain resolves", "✗".red());
            return;
        }
        println!("{} Found {} subdomain(s):", "✓".green(), found.len());
        for (name, addresses) in found {
            println!("  • {} → {}", name, addresses.join(", "));
        }
    }
}

/// Renders the query counters as a console table.
///
/// Failure kinds with a zero count are left out.
pub fn render_statistics_table(stats: &QueryStatsSnapshot) -> String {
    let mut rows = vec![
        ("queries sent".to_string(), stats.queries),
        ("answered".to_string(), stats.answered),
    ];
    rows.extend(
        stats
            .failures
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(kind, count)| (kind.to_string(), *count)),
    );

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut table = String::from("Query statistics:\n");
    for (label, count) in rows {
        table.push_str(&format!("  {label:<width$}  {count:>6}\n"));
    }
    table
}

/// Prints the query statistics table after a scan.
pub fn print_statistics_table(stats: &QueryStatsSnapshot) {
    print!("{}", render_statistics_table(stats));
}
