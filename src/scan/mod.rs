//! Scan orchestration.
//!
//! A [`Scanner`] maps one target domain in a fixed sequence of phases:
//!
//! 1. collect the A, MX, NS and TXT record sets of the target,
//! 2. reverse-look-up every discovered address and sweep its neighbors,
//! 3. sweep the candidate subdomain dictionary.
//!
//! Lookup failures are absorbed by the [`ResolverAdapter`], so every scan
//! reaches [`ScanPhase::Complete`].

mod observer;

use std::net::Ipv4Addr;
use std::time::Duration;

use log::{info, warn};
use strum_macros::Display;
use tokio::time::Instant;

use crate::config::{
    Config, DEFAULT_NEIGHBOR_RADIUS, DEFAULT_SWEEP_CONCURRENCY, SUBDOMAIN_WORDLIST,
};
use crate::dns::{lookup_records, reverse_lookup, RecordKind, ResolverAdapter};
use crate::error_handling::LookupError;
use crate::models::{ScanResult, ScanResultBuilder};
use crate::sweep::{sweep_neighbors, sweep_subdomains, SweepOptions};

pub use observer::{NoopObserver, ScanObserver};

/// Lifecycle of a scan. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum ScanPhase {
    #[strum(to_string = "idle")]
    Idle,
    #[strum(to_string = "resolving records")]
    ResolvingRecords,
    #[strum(to_string = "resolving reverse names and neighbors")]
    ResolvingReverseAndNeighbors,
    #[strum(to_string = "enumerating subdomains")]
    EnumeratingSubdomains,
    #[strum(to_string = "complete")]
    Complete,
}

/// Tuning knobs of a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Radius of the neighbor sweep around each discovered address
    pub neighbor_radius: u32,
    /// Maximum number of sweep lookups in flight
    pub concurrency: usize,
    /// Deadline for the whole scan, measured from the start of [`Scanner::run`]
    pub deadline: Option<Duration>,
    /// Candidate subdomain labels, in query order
    pub wordlist: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            neighbor_radius: DEFAULT_NEIGHBOR_RADIUS,
            concurrency: DEFAULT_SWEEP_CONCURRENCY,
            deadline: None,
            wordlist: SUBDOMAIN_WORDLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<&Config> for ScanOptions {
    fn from(config: &Config) -> Self {
        Self {
            neighbor_radius: config.neighbor_radius,
            concurrency: config.concurrency,
            deadline: config.scan_deadline(),
            ..Default::default()
        }
    }
}

/// Maps the DNS footprint of one target domain.
pub struct Scanner {
    target: String,
    adapter: ResolverAdapter,
    options: ScanOptions,
    observer: Box<dyn ScanObserver>,
    phase: ScanPhase,
}

impl Scanner {
    pub fn new(target: impl Into<String>, adapter: ResolverAdapter, options: ScanOptions) -> Self {
        Self {
            target: target.into(),
            adapter,
            options,
            observer: Box::new(NoopObserver),
            phase: ScanPhase::Idle,
        }
    }

    /// Sets the observer notified of progress while the scan runs.
    pub fn with_observer(mut self, observer: Box<dyn ScanObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    fn advance(&mut self, next: ScanPhase) {
        debug_assert!(next > self.phase, "scan phases only move forward");
        info!("{}: {} -> {}", self.target, self.phase, next);
        self.phase = next;
        self.observer.phase_changed(next);
    }

    /// Runs the scan to completion and returns its result.
    ///
    /// Consumes the scanner: a scan runs exactly once.
    pub async fn run(mut self) -> ScanResult {
        let sweep = SweepOptions {
            concurrency: self.options.concurrency.max(1),
            deadline: self.options.deadline.map(|d| Instant::now() + d),
        };
        let mut builder = ScanResultBuilder::new(self.target.clone());

        self.advance(ScanPhase::ResolvingRecords);
        let mut addresses = Vec::new();
        for kind in RecordKind::TARGET_KINDS {
            let values = self.resolve_record_set(&mut builder, kind).await;
            if kind == RecordKind::A {
                addresses = values;
            }
        }

        self.advance(ScanPhase::ResolvingReverseAndNeighbors);
        for (index, address) in addresses.iter().enumerate() {
            if deadline_reached(&sweep) {
                warn!(
                    "{}: scan deadline reached, skipping {} remaining address(es)",
                    self.target,
                    addresses.len() - index
                );
                break;
            }
            let ip: Ipv4Addr = match address.parse() {
                Ok(ip) => ip,
                Err(_) => {
                    self.adapter.record_local_failure(&LookupError::AddressParseError {
                        input: address.clone(),
                    });
                    continue;
                }
            };

            let names = reverse_lookup(&self.adapter, ip).await;
            if let Some(canonical) = names.first() {
                self.observer.canonical_name(ip, canonical);
                builder.canonical_name(ip, canonical.clone());
            }

            let neighbors =
                sweep_neighbors(&self.adapter, ip, self.options.neighbor_radius, &sweep).await;
            self.observer.neighbors(ip, &neighbors);
            builder.neighbors(ip, neighbors);
        }

        self.advance(ScanPhase::EnumeratingSubdomains);
        let subdomains =
            sweep_subdomains(&self.adapter, &self.target, &self.options.wordlist, &sweep).await;
        self.observer.subdomains(&subdomains);
        builder.subdomains(subdomains);

        if deadline_reached(&sweep) {
            warn!(
                "{}: scan deadline reached, results are partial",
                self.target
            );
        }

        self.advance(ScanPhase::Complete);
        builder.build()
    }

    /// Looks up one record kind of the target, stores it and returns it.
    async fn resolve_record_set(
        &self,
        builder: &mut ScanResultBuilder,
        kind: RecordKind,
    ) -> Vec<String> {
        let values = lookup_records(&self.adapter, &self.target, kind).await;
        info!("{}: {} {kind} record(s)", self.target, values.len());
        self.observer.record_set(kind, &values);
        builder.record_set(kind, values.clone());
        values
    }
}

fn deadline_reached(sweep: &SweepOptions) -> bool {
    sweep.deadline.is_some_and(|at| Instant::now() >= at)
}

#[cfg(test)]
mod tests;
