//! Scanner tests against a static backend.

use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::*;
use crate::dns::mock::StaticBackend;
use crate::models::{NeighborMap, SubdomainMap};

fn scanner(backend: &StaticBackend, options: ScanOptions) -> Scanner {
    let adapter = ResolverAdapter::new(Arc::new(backend.clone()), Duration::from_millis(500));
    Scanner::new("example.com", adapter, options)
}

fn single_record_backend() -> StaticBackend {
    StaticBackend::new()
        .with_a("example.com", "203.0.113.5")
        .with_mx("example.com", 10, "mail.example.com.")
        .with_ns("example.com", "ns1.example.net.")
        .with_txt("example.com", &["v=spf1 ", "-all"])
}

#[derive(Default)]
struct RecordingObserver {
    phases: Mutex<Vec<ScanPhase>>,
    record_sets: Mutex<Vec<(RecordKind, usize)>>,
    canonical: Mutex<Vec<(Ipv4Addr, String)>>,
}

impl ScanObserver for Arc<RecordingObserver> {
    fn phase_changed(&self, phase: ScanPhase) {
        self.phases.lock().unwrap().push(phase);
    }

    fn record_set(&self, kind: RecordKind, values: &[String]) {
        self.record_sets.lock().unwrap().push((kind, values.len()));
    }

    fn canonical_name(&self, address: Ipv4Addr, name: &str) {
        self.canonical
            .lock()
            .unwrap()
            .push((address, name.to_string()));
    }
}

#[tokio::test]
async fn test_end_to_end_single_records() {
    let result = scanner(&single_record_backend(), ScanOptions::default())
        .run()
        .await;

    let records = result.records();
    assert_eq!(records.a, vec!["203.0.113.5"]);
    assert_eq!(records.mx, vec!["mail.example.com"]);
    assert_eq!(records.ns, vec!["ns1.example.net"]);
    assert_eq!(records.txt, vec!["v=spf1 -all"]);

    assert!(result.subdomains().is_empty());
    let base = Ipv4Addr::new(203, 0, 113, 5);
    assert_eq!(result.neighbors().len(), 1);
    assert_eq!(result.neighbors()[&base], NeighborMap::new());
    assert!(result.canonical_names().is_empty());
}

#[tokio::test]
async fn test_empty_target_still_completes() {
    let result = scanner(&StaticBackend::new(), ScanOptions::default())
        .run()
        .await;

    for kind in RecordKind::TARGET_KINDS {
        assert!(result.records().get(kind).is_empty());
    }
    assert!(result.neighbors().is_empty());
    assert!(result.subdomains().is_empty());
}

#[tokio::test]
async fn test_scan_collects_reverse_neighbors_and_subdomains() {
    let backend = single_record_backend()
        .with_ptr("203.0.113.5", "web1.example.com.")
        .with_ptr("203.0.113.7", "web3.example.com.")
        .with_a("www.example.com", "203.0.113.5")
        .with_a("mail.example.com", "203.0.113.25");
    let options = ScanOptions {
        neighbor_radius: 2,
        ..Default::default()
    };

    let result = scanner(&backend, options).run().await;

    let base = Ipv4Addr::new(203, 0, 113, 5);
    assert_eq!(result.canonical_names()[&base], "web1.example.com");

    let neighbors = &result.neighbors()[&base];
    assert_eq!(neighbors.len(), 1);
    assert_eq!(
        neighbors[&Ipv4Addr::new(203, 0, 113, 7)],
        vec!["web3.example.com".to_string()]
    );

    let mut expected = SubdomainMap::new();
    expected.insert("mail.example.com".into(), vec!["203.0.113.25".into()]);
    expected.insert("www.example.com".into(), vec!["203.0.113.5".into()]);
    assert_eq!(result.subdomains(), &expected);
}

#[tokio::test]
async fn test_scan_is_idempotent() {
    let backend = single_record_backend()
        .with_ptr("203.0.113.4", "web0.example.com.")
        .with_a("api.example.com", "203.0.113.9");

    let first = scanner(&backend, ScanOptions::default()).run().await;
    let second = scanner(&backend, ScanOptions::default()).run().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_observer_sees_phases_in_order() {
    let observer = Arc::new(RecordingObserver::default());
    let backend = single_record_backend().with_ptr("203.0.113.5", "web1.example.com.");

    let scan = scanner(&backend, ScanOptions::default())
        .with_observer(Box::new(Arc::clone(&observer)));
    assert_eq!(scan.phase(), ScanPhase::Idle);
    scan.run().await;

    assert_eq!(
        *observer.phases.lock().unwrap(),
        vec![
            ScanPhase::ResolvingRecords,
            ScanPhase::ResolvingReverseAndNeighbors,
            ScanPhase::EnumeratingSubdomains,
            ScanPhase::Complete,
        ]
    );
    assert_eq!(
        *observer.record_sets.lock().unwrap(),
        vec![
            (RecordKind::A, 1),
            (RecordKind::Mx, 1),
            (RecordKind::Ns, 1),
            (RecordKind::Txt, 1),
        ]
    );
    let base = Ipv4Addr::new(203, 0, 113, 5);
    assert_eq!(
        *observer.canonical.lock().unwrap(),
        vec![(base, "web1.example.com".to_string())]
    );
}

#[tokio::test]
async fn test_record_lookups_precede_sweeps() {
    let backend = single_record_backend();
    let options = ScanOptions {
        neighbor_radius: 1,
        wordlist: vec!["www".into()],
        ..Default::default()
    };
    scanner(&backend, options).run().await;

    let kinds: Vec<RecordKind> = backend
        .queries()
        .into_iter()
        .map(|(_, kind)| kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            RecordKind::A,
            RecordKind::Mx,
            RecordKind::Ns,
            RecordKind::Txt,
            // canonical name, then the two neighbors
            RecordKind::Ptr,
            RecordKind::Ptr,
            RecordKind::Ptr,
            RecordKind::A,
        ]
    );
}

#[tokio::test]
async fn test_deadline_yields_partial_but_complete_result() {
    let backend = single_record_backend().with_delay(Duration::from_millis(30));
    let adapter = ResolverAdapter::new(Arc::new(backend), Duration::from_millis(500));
    let options = ScanOptions {
        concurrency: 1,
        deadline: Some(Duration::from_millis(200)),
        ..Default::default()
    };

    let result = Scanner::new("example.com", adapter, options).run().await;

    // Record sets are collected before any sweep and are not cut short
    assert_eq!(result.records().a, vec!["203.0.113.5"]);
    assert!(result.subdomains().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_deadline_skips_remaining_addresses() {
    let backend = single_record_backend()
        .with_a("example.com", "203.0.113.6")
        .with_a("example.com", "203.0.113.7")
        .with_delay(Duration::from_millis(30));
    let adapter = ResolverAdapter::new(Arc::new(backend.clone()), Duration::from_millis(500));
    let options = ScanOptions {
        concurrency: 1,
        // Passes while the four record sets are still being collected
        deadline: Some(Duration::from_millis(100)),
        ..Default::default()
    };

    let result = Scanner::new("example.com", adapter, options).run().await;

    assert_eq!(result.records().a.len(), 3);
    assert!(result.neighbors().is_empty());
    let queries = backend.queries();
    assert!(queries.iter().all(|(_, kind)| *kind != RecordKind::Ptr));
}

#[test]
fn test_scan_options_from_config() {
    let config = Config {
        neighbor_radius: 3,
        concurrency: 7,
        deadline_seconds: Some(60),
        ..Config::new("example.com")
    };
    let options = ScanOptions::from(&config);
    assert_eq!(options.neighbor_radius, 3);
    assert_eq!(options.concurrency, 7);
    assert_eq!(options.deadline, Some(Duration::from_secs(60)));
    assert_eq!(options.wordlist.len(), 32);
}
