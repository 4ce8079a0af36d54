//! DNS record kinds and decoded record values.

use std::net::Ipv4Addr;

use serde::Serialize;
use strum_macros::{Display, EnumIter};
use trust_dns_resolver::proto::rr::RecordType;

/// Record kinds queried by the mapper.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize,
)]
pub enum RecordKind {
    /// IPv4 address
    #[strum(serialize = "A")]
    #[serde(rename = "A")]
    A,
    /// Mail exchange
    #[strum(serialize = "MX")]
    #[serde(rename = "MX")]
    Mx,
    /// Nameserver
    #[strum(serialize = "NS")]
    #[serde(rename = "NS")]
    Ns,
    /// Text
    #[strum(serialize = "TXT")]
    #[serde(rename = "TXT")]
    Txt,
    /// Pointer (reverse lookups only)
    #[strum(serialize = "PTR")]
    #[serde(rename = "PTR")]
    Ptr,
}

impl RecordKind {
    /// Kinds collected for the scan target, in collection order.
    pub const TARGET_KINDS: [RecordKind; 4] = [
        RecordKind::A,
        RecordKind::Mx,
        RecordKind::Ns,
        RecordKind::Txt,
    ];

    /// Wire record type for this kind.
    pub fn record_type(self) -> RecordType {
        match self {
            RecordKind::A => RecordType::A,
            RecordKind::Mx => RecordType::MX,
            RecordKind::Ns => RecordType::NS,
            RecordKind::Txt => RecordType::TXT,
            RecordKind::Ptr => RecordType::PTR,
        }
    }

    /// Human readable name of the records of this kind.
    pub fn description(self) -> &'static str {
        match self {
            RecordKind::A => "IP addresses",
            RecordKind::Mx => "mail servers",
            RecordKind::Ns => "nameservers",
            RecordKind::Txt => "TXT records",
            RecordKind::Ptr => "reverse names",
        }
    }
}

/// One decoded record as returned by a [`DnsBackend`](super::DnsBackend).
///
/// Values are already text: names are presentation-form (possibly with the
/// trailing root dot) and TXT segments are decoded but not yet joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    /// A record
    Address(Ipv4Addr),
    /// MX record
    MailExchange {
        /// Preference, lower is preferred
        preference: u16,
        /// Exchange host name
        exchange: String,
    },
    /// NS or PTR target name
    Name(String),
    /// TXT record character-strings, in wire order
    Text(Vec<String>),
}
