//! DNS resolution and record querying.
//!
//! This module provides async DNS operations on top of `trust-dns-resolver`:
//! - A pluggable query backend ([`DnsBackend`])
//! - A timeout-bound adapter that classifies and absorbs failures
//! - Record set lookups (A, MX, NS, TXT)
//! - Reverse lookups (PTR records)
//!
//! No lookup in this module returns an error to its caller: every failure is
//! counted, logged and turned into an empty result.

mod adapter;
mod backend;
mod records;
mod resolution;
mod types;

#[cfg(test)]
pub(crate) mod mock;

// Re-export public API
pub use adapter::ResolverAdapter;
pub use backend::{DnsBackend, TrustDnsBackend};
pub use records::{
    join_txt_segments, lookup_a_records, lookup_mx_records, lookup_ns_records, lookup_records,
    lookup_txt_records, normalize_values, strip_root_dot,
};
pub use resolution::{reverse_dns_lookup, reverse_lookup, reverse_name};
pub use types::{RecordKind, RecordValue};
