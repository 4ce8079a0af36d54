//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: query
//! timeouts, sweep sizes and the candidate subdomain dictionary.

// Network operation timeouts
/// DNS query timeout in seconds.
///
/// Applied to every single query (forward or reverse). A query that does not
/// answer within this window is recorded as a timeout and treated as empty.
pub const DNS_TIMEOUT_SECS: u64 = 2;

/// Number of attempts the underlying resolver makes per upstream query.
///
/// Kept at one so the per-query timeout is a real upper bound.
pub const DNS_ATTEMPTS: usize = 1;

// Sweep parameters
/// Default symmetric radius of the neighbor sweep (probes `base-5 ..= base+5`).
pub const DEFAULT_NEIGHBOR_RADIUS: u32 = 5;

/// Default maximum number of queries in flight during a sweep.
///
/// Large enough to keep a 32-entry dictionary sweep fast, small enough not to
/// trip rate limiting on public resolvers.
pub const DEFAULT_SWEEP_CONCURRENCY: usize = 10;

// Display limits
/// TXT records longer than this are truncated in console output (not in reports).
pub const MAX_TXT_DISPLAY_CHARS: usize = 80;

/// Prefix of generated report file names (`dns_report_<target>_<timestamp>.<ext>`).
pub const REPORT_FILE_PREFIX: &str = "dns_report";

/// Timestamp format used in report file names.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Candidate subdomain labels probed by the subdomain sweep, in query order.
pub const SUBDOMAIN_WORDLIST: [&str; 32] = [
    "www",
    "mail",
    "webmail",
    "smtp",
    "pop",
    "imap",
    "ftp",
    "api",
    "admin",
    "blog",
    "dev",
    "test",
    "preprod",
    "staging",
    "prod",
    "production",
    "extranet",
    "intranet",
    "intra",
    "vpn",
    "remote",
    "portal",
    "crm",
    "erp",
    "mobile",
    "app",
    "cdn",
    "static",
    "shop",
    "store",
    "payment",
    "secure",
];
