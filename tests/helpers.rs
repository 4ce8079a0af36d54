// Shared test helpers for scans against an in-memory DNS backend.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use dns_mapper::{
    Config, DnsBackend, LogFormat, LogLevel, LookupError, RecordKind, RecordValue, ReportFormat,
};

/// DNS backend answering from a fixed table. Unknown names are NXDOMAIN.
#[derive(Default)]
pub struct TableBackend {
    answers: HashMap<(String, RecordKind), Vec<RecordValue>>,
}

#[allow(dead_code)] // Used by other test files
impl TableBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, name: &str, kind: RecordKind, value: RecordValue) -> Self {
        self.answers
            .entry((name.to_string(), kind))
            .or_default()
            .push(value);
        self
    }

    pub fn a(self, name: &str, ip: &str) -> Self {
        let ip: Ipv4Addr = ip.parse().expect("test address");
        self.answer(name, RecordKind::A, RecordValue::Address(ip))
    }

    pub fn ptr(self, ip: &str, name: &str) -> Self {
        let ip: Ipv4Addr = ip.parse().expect("test address");
        let o = ip.octets();
        let reverse = format!("{}.{}.{}.{}.in-addr.arpa.", o[3], o[2], o[1], o[0]);
        self.answer(&reverse, RecordKind::Ptr, RecordValue::Name(name.to_string()))
    }

    pub fn into_backend(self) -> Arc<dyn DnsBackend> {
        Arc::new(self)
    }
}

#[async_trait]
impl DnsBackend for TableBackend {
    async fn lookup(&self, name: &str, kind: RecordKind) -> Result<Vec<RecordValue>, LookupError> {
        match self.answers.get(&(name.to_string(), kind)) {
            Some(values) => Ok(values.clone()),
            None => Err(LookupError::NameNotFound {
                name: name.to_string(),
            }),
        }
    }
}

/// The single-record domain used by most scenarios.
#[allow(dead_code)] // Used by other test files
pub fn example_backend() -> TableBackend {
    TableBackend::new()
        .a("example.com", "203.0.113.5")
        .answer(
            "example.com",
            RecordKind::Mx,
            RecordValue::MailExchange {
                preference: 10,
                exchange: "mail.example.com.".to_string(),
            },
        )
        .answer(
            "example.com",
            RecordKind::Ns,
            RecordValue::Name("ns1.example.net.".to_string()),
        )
        .answer(
            "example.com",
            RecordKind::Txt,
            RecordValue::Text(vec!["v=spf1 -all".to_string()]),
        )
}

/// Creates a basic Config for testing that writes its report into `output_dir`.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(target: &str, output_dir: &Path, format: ReportFormat) -> Config {
    Config {
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        output_dir: output_dir.to_path_buf(),
        report_format: format,
        quiet: true,
        ..Config::new(target)
    }
}
