//! Reverse DNS lookup (PTR records).

use std::net::Ipv4Addr;

use super::adapter::ResolverAdapter;
use super::records::lookup_records;
use super::types::RecordKind;
use crate::error_handling::LookupError;

/// Builds the `in-addr.arpa.` name queried for a reverse lookup of `ip`.
pub fn reverse_name(ip: Ipv4Addr) -> String {
    let [a, b, c, d] = ip.octets();
    format!("{d}.{c}.{b}.{a}.in-addr.arpa.")
}

/// Performs a reverse DNS lookup for an IPv4 address.
///
/// Returns the PTR names with their trailing root dot removed. The first name
/// is treated as canonical. Returns an empty vector if nothing is registered
/// or the lookup fails.
pub async fn reverse_lookup(adapter: &ResolverAdapter, ip: Ipv4Addr) -> Vec<String> {
    lookup_records(adapter, &reverse_name(ip), RecordKind::Ptr).await
}

/// Same as [`reverse_lookup`] for an address in string form.
///
/// An unparsable address is counted as an
/// [`AddressParseError`](LookupError::AddressParseError) and yields an empty
/// vector.
pub async fn reverse_dns_lookup(adapter: &ResolverAdapter, ip: &str) -> Vec<String> {
    match ip.trim().parse::<Ipv4Addr>() {
        Ok(addr) => reverse_lookup(adapter, addr).await,
        Err(_) => {
            adapter.record_local_failure(&LookupError::AddressParseError {
                input: ip.to_string(),
            });
            Vec::new()
        }
    }
}
