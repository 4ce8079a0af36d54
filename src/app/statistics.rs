//! Statistics printing.

use log::info;

use crate::error_handling::QueryStatsSnapshot;

/// Prints query counters and failure counts to the log.
///
/// Failure kinds with a zero count are skipped.
pub fn print_query_statistics(stats: &QueryStatsSnapshot) {
    info!(
        "Queries: {} sent, {} answered",
        stats.queries, stats.answered
    );

    let total_failures = stats.total_failures();
    if total_failures > 0 {
        info!("Lookup Failure Counts ({} total):", total_failures);
        for (kind, count) in &stats.failures {
            if *count > 0 {
                info!("   {}: {}", kind, count);
            }
        }
    }
}
