//! Error handling and query statistics.
//!
//! This module provides:
//! - The lookup failure taxonomy ([`LookupError`] / [`LookupErrorKind`])
//! - Initialization and report errors
//! - Query statistics tracking (queries, answers, failures per kind)
//!
//! Lookup failures never abort a scan. They are counted here and collapsed to
//! an empty result by the resolver adapter.

mod stats;
mod types;

// Re-export public API
pub use stats::{QueryStats, QueryStatsSnapshot};
pub use types::{InitializationError, LookupError, LookupErrorKind, ReportError};
