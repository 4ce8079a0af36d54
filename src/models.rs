//! Scan result model.
//!
//! [`ScanResult`] is the aggregate produced by one scan. It is assembled by the
//! scanner through [`ScanResultBuilder`] and is read-only afterwards.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use serde::Serialize;

use crate::dns::RecordKind;

/// Names returned by a reverse lookup of one address. The first is canonical.
pub type ReverseResult = Vec<String>;

/// Resolving neighbors of one base address, ordered numerically.
pub type NeighborMap = BTreeMap<Ipv4Addr, ReverseResult>;

/// Resolving candidate subdomains and their addresses.
pub type SubdomainMap = BTreeMap<String, Vec<String>>;

/// Record sets collected for the scan target, one per kind.
///
/// Every set is always present; an empty set means nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSets {
    #[serde(rename = "A")]
    pub a: Vec<String>,
    #[serde(rename = "MX")]
    pub mx: Vec<String>,
    #[serde(rename = "NS")]
    pub ns: Vec<String>,
    #[serde(rename = "TXT")]
    pub txt: Vec<String>,
}

impl RecordSets {
    /// Record set of `kind`. PTR has no target-level set and is always empty.
    pub fn get(&self, kind: RecordKind) -> &[String] {
        match kind {
            RecordKind::A => &self.a,
            RecordKind::Mx => &self.mx,
            RecordKind::Ns => &self.ns,
            RecordKind::Txt => &self.txt,
            RecordKind::Ptr => &[],
        }
    }

    fn slot_mut(&mut self, kind: RecordKind) -> Option<&mut Vec<String>> {
        match kind {
            RecordKind::A => Some(&mut self.a),
            RecordKind::Mx => Some(&mut self.mx),
            RecordKind::Ns => Some(&mut self.ns),
            RecordKind::Txt => Some(&mut self.txt),
            RecordKind::Ptr => None,
        }
    }
}

/// Everything one scan found about its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    target: String,
    records: RecordSets,
    canonical_names: BTreeMap<Ipv4Addr, String>,
    neighbors: BTreeMap<Ipv4Addr, NeighborMap>,
    subdomains: SubdomainMap,
}

impl ScanResult {
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn records(&self) -> &RecordSets {
        &self.records
    }

    /// First reverse name of each primary address that has one.
    pub fn canonical_names(&self) -> &BTreeMap<Ipv4Addr, String> {
        &self.canonical_names
    }

    /// Neighbor sweep results keyed by primary address.
    ///
    /// Every swept primary address has an entry, possibly an empty map.
    pub fn neighbors(&self) -> &BTreeMap<Ipv4Addr, NeighborMap> {
        &self.neighbors
    }

    pub fn subdomains(&self) -> &SubdomainMap {
        &self.subdomains
    }

    /// Total number of resolving neighbors across all primary addresses.
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.values().map(BTreeMap::len).sum()
    }
}

/// Step-by-step assembly of a [`ScanResult`].
///
/// Enforces the model's invariants: empty reverse results and empty
/// subdomain address sets are never stored.
#[derive(Debug, Clone)]
pub struct ScanResultBuilder {
    target: String,
    records: RecordSets,
    canonical_names: BTreeMap<Ipv4Addr, String>,
    neighbors: BTreeMap<Ipv4Addr, NeighborMap>,
    subdomains: SubdomainMap,
}

impl ScanResultBuilder {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            records: RecordSets::default(),
            canonical_names: BTreeMap::new(),
            neighbors: BTreeMap::new(),
            subdomains: SubdomainMap::new(),
        }
    }

    /// Stores the record set of one target kind, replacing any earlier one.
    pub fn record_set(&mut self, kind: RecordKind, values: Vec<String>) -> &mut Self {
        match self.records.slot_mut(kind) {
            Some(slot) => *slot = values,
            None => log::warn!("Ignoring {kind} record set: not a target record kind"),
        }
        self
    }

    pub fn canonical_name(&mut self, address: Ipv4Addr, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !name.is_empty() {
            self.canonical_names.insert(address, name);
        }
        self
    }

    /// Stores the neighbor sweep of one primary address.
    pub fn neighbors(&mut self, base: Ipv4Addr, mut found: NeighborMap) -> &mut Self {
        found.retain(|_, names| !names.is_empty());
        self.neighbors.insert(base, found);
        self
    }

    pub fn subdomains(&mut self, mut found: SubdomainMap) -> &mut Self {
        found.retain(|_, addresses| !addresses.is_empty());
        self.subdomains.extend(found);
        self
    }

    pub fn build(self) -> ScanResult {
        ScanResult {
            target: self.target,
            records: self.records,
            canonical_names: self.canonical_names,
            neighbors: self.neighbors,
            subdomains: self.subdomains,
        }
    }
}
