//! Neighbor and subdomain sweeps.
//!
//! A sweep is a batch of independent lookups over a fixed candidate set. The
//! lookups run as a bounded pool (at most `concurrency` in flight) and their
//! results are collected in candidate order. A failed lookup only removes its
//! own candidate from the output.

mod neighbors;
mod subdomains;

use std::future::Future;

use futures::stream::{self, StreamExt};
use tokio::time::Instant;

use crate::config::DEFAULT_SWEEP_CONCURRENCY;

pub use neighbors::{neighbor_address, neighbor_candidates, sweep_neighbors};
pub use subdomains::{candidate_names, sweep_subdomains};

/// Execution limits shared by all sweeps of a scan.
#[derive(Debug, Clone, Copy)]
pub struct SweepOptions {
    /// Maximum number of lookups in flight
    pub concurrency: usize,
    /// Once reached, results still pending are abandoned
    pub deadline: Option<Instant>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_SWEEP_CONCURRENCY,
            deadline: None,
        }
    }
}

/// Runs `probe` over every candidate with bounded concurrency.
///
/// Output order follows candidate order. When the deadline passes, the
/// results gathered so far are returned and the rest are dropped.
pub(crate) async fn run_bounded<C, T, F, Fut>(
    candidates: Vec<C>,
    options: &SweepOptions,
    probe: F,
) -> Vec<T>
where
    F: FnMut(C) -> Fut,
    Fut: Future<Output = T>,
{
    let deadline = options.deadline;
    let stop = async move {
        match deadline {
            Some(at) => tokio::time::sleep_until(at).await,
            None => std::future::pending::<()>().await,
        }
    };

    stream::iter(candidates)
        .map(probe)
        .buffered(options.concurrency.max(1))
        .take_until(stop)
        .collect()
        .await
}
