//! DNS query backends.
//!
//! [`DnsBackend`] is the seam between the lookup engine and whatever answers
//! DNS queries. The production implementation wraps `trust-dns-resolver`;
//! tests substitute a static in-memory table.

use async_trait::async_trait;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::error::ProtoErrorKind;
use trust_dns_resolver::proto::op::ResponseCode;
use trust_dns_resolver::proto::rr::RData;
use trust_dns_resolver::TokioAsyncResolver;

use super::types::{RecordKind, RecordValue};
use crate::error_handling::LookupError;

/// A DNS query capability.
///
/// Implementations return decoded values and classify failures into
/// [`LookupError`]. Timeouts are enforced by the caller
/// ([`ResolverAdapter`](super::ResolverAdapter)), so a backend may block for
/// as long as it likes.
#[async_trait]
pub trait DnsBackend: Send + Sync {
    /// Queries `name` for records of `kind`.
    async fn lookup(&self, name: &str, kind: RecordKind) -> Result<Vec<RecordValue>, LookupError>;
}

/// Backend that forwards queries to a `trust-dns` async resolver.
pub struct TrustDnsBackend {
    resolver: TokioAsyncResolver,
}

impl TrustDnsBackend {
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DnsBackend for TrustDnsBackend {
    async fn lookup(&self, name: &str, kind: RecordKind) -> Result<Vec<RecordValue>, LookupError> {
        match self.resolver.lookup(name, kind.record_type()).await {
            Ok(lookup) => Ok(lookup.iter().filter_map(record_value).collect()),
            Err(e) => Err(classify_resolve_error(name, kind, &e)),
        }
    }
}

/// Converts one answer record into a [`RecordValue`].
///
/// Records of other types (e.g. the CNAME chain in front of an A answer) are
/// dropped.
fn record_value(rdata: &RData) -> Option<RecordValue> {
    match rdata {
        RData::A(a) => Some(RecordValue::Address(a.0)),
        RData::MX(mx) => Some(RecordValue::MailExchange {
            preference: mx.preference(),
            exchange: mx.exchange().to_utf8(),
        }),
        RData::NS(ns) => Some(RecordValue::Name(ns.0.to_utf8())),
        RData::PTR(ptr) => Some(RecordValue::Name(ptr.0.to_utf8())),
        RData::TXT(txt) => {
            let segments = txt.iter().map(|segment| &segment[..]);
            Some(RecordValue::Text(decode_txt_segments(segments)))
        }
        _ => None,
    }
}

/// Decodes TXT character-strings to text, replacing invalid UTF-8.
pub(crate) fn decode_txt_segments<'a>(segments: impl Iterator<Item = &'a [u8]>) -> Vec<String> {
    segments
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .collect()
}

/// Maps a resolver error onto the lookup failure taxonomy.
pub(crate) fn classify_resolve_error(
    name: &str,
    kind: RecordKind,
    error: &ResolveError,
) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            LookupError::NameNotFound {
                name: name.to_string(),
            }
        }
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecordsOfKind {
            name: name.to_string(),
            kind,
        },
        ResolveErrorKind::Timeout => LookupError::QueryTimeout {
            name: name.to_string(),
            kind,
        },
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            LookupError::QueryTimeout {
                name: name.to_string(),
                kind,
            }
        }
        _ => LookupError::ProtocolError {
            name: name.to_string(),
            kind,
            message: error.to_string(),
        },
    }
}
