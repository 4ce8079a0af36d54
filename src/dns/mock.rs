//! Static in-memory backend for unit tests.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::resolution::reverse_name;
use super::{DnsBackend, RecordKind, RecordValue};
use crate::error_handling::LookupError;

type Answer = Result<Vec<RecordValue>, LookupError>;

/// Answers queries from a fixed table. Unknown names are NXDOMAIN.
#[derive(Clone, Default)]
pub(crate) struct StaticBackend {
    answers: HashMap<(String, RecordKind), Answer>,
    delay: Option<Duration>,
    queries: Arc<Mutex<Vec<(String, RecordKind)>>>,
}

impl StaticBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, name: &str, kind: RecordKind, value: RecordValue) -> Self {
        let entry = self
            .answers
            .entry((name.to_string(), kind))
            .or_insert_with(|| Ok(Vec::new()));
        if let Ok(values) = entry {
            values.push(value);
        }
        self
    }

    pub fn with_a(self, name: &str, ip: &str) -> Self {
        let ip: Ipv4Addr = ip.parse().expect("test address");
        self.push(name, RecordKind::A, RecordValue::Address(ip))
    }

    pub fn with_mx(self, name: &str, preference: u16, exchange: &str) -> Self {
        self.push(
            name,
            RecordKind::Mx,
            RecordValue::MailExchange {
                preference,
                exchange: exchange.to_string(),
            },
        )
    }

    pub fn with_ns(self, name: &str, target: &str) -> Self {
        self.push(name, RecordKind::Ns, RecordValue::Name(target.to_string()))
    }

    pub fn with_txt(self, name: &str, segments: &[&str]) -> Self {
        self.push(
            name,
            RecordKind::Txt,
            RecordValue::Text(segments.iter().map(|s| s.to_string()).collect()),
        )
    }

    pub fn with_ptr(self, ip: &str, target: &str) -> Self {
        let ip: Ipv4Addr = ip.parse().expect("test address");
        self.push(
            &reverse_name(ip),
            RecordKind::Ptr,
            RecordValue::Name(target.to_string()),
        )
    }

    /// Answers with a successful response that carries no records.
    pub fn with_empty(mut self, name: &str, kind: RecordKind) -> Self {
        self.answers.insert((name.to_string(), kind), Ok(Vec::new()));
        self
    }

    pub fn with_error(mut self, name: &str, kind: RecordKind, error: LookupError) -> Self {
        self.answers.insert((name.to_string(), kind), Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every query received so far, in arrival order.
    pub fn queries(&self) -> Vec<(String, RecordKind)> {
        self.queries.lock().expect("queries lock").clone()
    }
}

#[async_trait]
impl DnsBackend for StaticBackend {
    async fn lookup(&self, name: &str, kind: RecordKind) -> Answer {
        self.queries
            .lock()
            .expect("queries lock")
            .push((name.to_string(), kind));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answers
            .get(&(name.to_string(), kind))
            .cloned()
            .unwrap_or_else(|| {
                Err(LookupError::NameNotFound {
                    name: name.to_string(),
                })
            })
    }
}
