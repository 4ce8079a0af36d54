//! Query statistics tracking.
//!
//! This module provides thread-safe counters for DNS queries issued during a
//! scan and the failures they ended in.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;
use strum::IntoEnumIterator;

use super::types::LookupErrorKind;

/// Thread-safe query statistics tracker.
///
/// Tracks issued queries, answered queries and failures per
/// [`LookupErrorKind`] using atomic counters, so concurrent sweep tasks can
/// share one instance through an `Arc`. All failure kinds are initialized to
/// zero on creation.
pub struct QueryStats {
    queries: AtomicUsize,
    answered: AtomicUsize,
    failures: HashMap<LookupErrorKind, AtomicUsize>,
}

impl QueryStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in LookupErrorKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }

        QueryStats {
            queries: AtomicUsize::new(0),
            answered: AtomicUsize::new(0),
            failures,
        }
    }

    /// Records that a query was sent.
    pub fn record_query(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    /// Records that a query came back with at least one record.
    pub fn record_answer(&self) {
        self.answered.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the counter of a failure kind.
    pub fn record_failure(&self, kind: LookupErrorKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in QueryStats initialization.",
                kind
            );
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn answered(&self) -> usize {
        self.answered.load(Ordering::SeqCst)
    }

    /// Get the count for a failure kind.
    pub fn failure_count(&self, kind: LookupErrorKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Sum of all failure counters.
    pub fn total_failures(&self) -> usize {
        self.failures.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Takes a point-in-time copy of all counters.
    pub fn snapshot(&self) -> QueryStatsSnapshot {
        QueryStatsSnapshot {
            queries: self.queries(),
            answered: self.answered(),
            failures: LookupErrorKind::iter()
                .map(|kind| (kind, self.failure_count(kind)))
                .collect(),
        }
    }
}

impl Default for QueryStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain copy of [`QueryStats`], attached to scan reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryStatsSnapshot {
    /// Queries sent
    pub queries: usize,
    /// Queries that returned at least one record
    pub answered: usize,
    /// Failures per kind (every kind present, possibly zero)
    pub failures: BTreeMap<LookupErrorKind, usize>,
}

impl QueryStatsSnapshot {
    pub fn total_failures(&self) -> usize {
        self.failures.values().sum()
    }
}
