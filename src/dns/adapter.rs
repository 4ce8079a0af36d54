//! Timeout-bound resolver adapter.
//!
//! Wraps a [`DnsBackend`] with the per-query timeout, counts every outcome in
//! [`QueryStats`] and collapses failures into empty results.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use super::backend::DnsBackend;
use super::types::{RecordKind, RecordValue};
use crate::error_handling::{LookupError, QueryStats};

/// Resolver adapter used by every lookup of a scan.
pub struct ResolverAdapter {
    backend: Arc<dyn DnsBackend>,
    timeout: Duration,
    stats: Arc<QueryStats>,
}

impl ResolverAdapter {
    /// Creates an adapter with its own statistics tracker.
    pub fn new(backend: Arc<dyn DnsBackend>, timeout: Duration) -> Self {
        Self {
            backend,
            timeout,
            stats: Arc::new(QueryStats::new()),
        }
    }

    /// Replaces the statistics tracker, so callers can keep a handle to it.
    pub fn with_stats(mut self, stats: Arc<QueryStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn stats(&self) -> &Arc<QueryStats> {
        &self.stats
    }

    /// Runs one query under the timeout and returns its classified outcome.
    ///
    /// An answer without any usable record counts as
    /// [`LookupError::NoRecordsOfKind`].
    pub async fn try_lookup(
        &self,
        name: &str,
        kind: RecordKind,
    ) -> Result<Vec<RecordValue>, LookupError> {
        self.stats.record_query();
        let query = self.backend.lookup(name, kind);
        let outcome = match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(values)) if values.is_empty() => Err(LookupError::NoRecordsOfKind {
                name: name.to_string(),
                kind,
            }),
            Ok(result) => result,
            Err(_elapsed) => Err(LookupError::QueryTimeout {
                name: name.to_string(),
                kind,
            }),
        };

        match &outcome {
            Ok(_) => self.stats.record_answer(),
            Err(e) => self.stats.record_failure(e.kind()),
        }
        outcome
    }

    /// Runs one query; any failure is logged and yields an empty vector.
    pub async fn lookup(&self, name: &str, kind: RecordKind) -> Vec<RecordValue> {
        match self.try_lookup(name, kind).await {
            Ok(values) => values,
            Err(e) => {
                log_lookup_failure(&e);
                Vec::new()
            }
        }
    }

    /// Counts and logs a failure that happened before any query was sent.
    pub fn record_local_failure(&self, error: &LookupError) {
        self.stats.record_failure(error.kind());
        log_lookup_failure(error);
    }
}

fn log_lookup_failure(error: &LookupError) {
    if error.is_negative_answer() {
        debug!("{error}");
    } else {
        warn!("DNS lookup failed: {error}");
    }
}
