//! Progress notifications emitted while a scan runs.

use std::net::Ipv4Addr;

use super::ScanPhase;
use crate::dns::RecordKind;
use crate::models::{NeighborMap, SubdomainMap};

/// Receives scan progress as it happens.
///
/// All methods default to doing nothing, so implementors only override what
/// they display.
pub trait ScanObserver: Send + Sync {
    fn phase_changed(&self, _phase: ScanPhase) {}

    /// A record set of the target has been collected.
    fn record_set(&self, _kind: RecordKind, _values: &[String]) {}

    /// A primary address has a reverse name.
    fn canonical_name(&self, _address: Ipv4Addr, _name: &str) {}

    /// The neighbor sweep around `base` finished.
    fn neighbors(&self, _base: Ipv4Addr, _found: &NeighborMap) {}

    /// The subdomain sweep finished.
    fn subdomains(&self, _found: &SubdomainMap) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
