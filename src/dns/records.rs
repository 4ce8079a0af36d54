//! DNS record queries (A, MX, NS, TXT).
//!
//! Each lookup returns the normalized record set for one kind. An empty set
//! means "no records, or the lookup failed"; failures never reach the caller.

use super::adapter::ResolverAdapter;
use super::types::{RecordKind, RecordValue};

/// Removes one trailing root-label dot from a name.
///
/// `mail.example.com.` becomes `mail.example.com`; a name without the dot is
/// returned unchanged.
pub fn strip_root_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Joins the character-strings of one TXT record into a single string.
pub fn join_txt_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments.iter().map(AsRef::as_ref).collect()
}

/// Turns decoded values into the display strings of a record set.
///
/// Only values matching `kind` are kept. MX answers are ordered by preference
/// (stable) before the preference is dropped.
pub fn normalize_values(kind: RecordKind, values: Vec<RecordValue>) -> Vec<String> {
    match kind {
        RecordKind::A => values
            .into_iter()
            .filter_map(|value| match value {
                RecordValue::Address(ip) => Some(ip.to_string()),
                _ => None,
            })
            .collect(),
        RecordKind::Mx => {
            let mut exchanges: Vec<(u16, String)> = values
                .into_iter()
                .filter_map(|value| match value {
                    RecordValue::MailExchange {
                        preference,
                        exchange,
                    } => Some((preference, exchange)),
                    _ => None,
                })
                .collect();
            exchanges.sort_by_key(|(preference, _)| *preference);
            exchanges
                .into_iter()
                .map(|(_, exchange)| strip_root_dot(&exchange).to_string())
                .collect()
        }
        RecordKind::Ns | RecordKind::Ptr => values
            .into_iter()
            .filter_map(|value| match value {
                RecordValue::Name(name) => Some(strip_root_dot(&name).to_string()),
                _ => None,
            })
            .collect(),
        RecordKind::Txt => values
            .into_iter()
            .filter_map(|value| match value {
                RecordValue::Text(segments) => Some(join_txt_segments(&segments)),
                _ => None,
            })
            .collect(),
    }
}

/// Queries `name` for `kind` and returns the normalized record set.
pub async fn lookup_records(
    adapter: &ResolverAdapter,
    name: &str,
    kind: RecordKind,
) -> Vec<String> {
    normalize_values(kind, adapter.lookup(name, kind).await)
}

/// Queries A records; values are dotted-quad strings.
pub async fn lookup_a_records(adapter: &ResolverAdapter, domain: &str) -> Vec<String> {
    lookup_records(adapter, domain, RecordKind::A).await
}

/// Queries MX records; values are exchange host names, most preferred first.
pub async fn lookup_mx_records(adapter: &ResolverAdapter, domain: &str) -> Vec<String> {
    lookup_records(adapter, domain, RecordKind::Mx).await
}

/// Queries NS records; values are nameserver host names.
pub async fn lookup_ns_records(adapter: &ResolverAdapter, domain: &str) -> Vec<String> {
    lookup_records(adapter, domain, RecordKind::Ns).await
}

/// Queries TXT records; one string per record with its segments joined.
pub async fn lookup_txt_records(adapter: &ResolverAdapter, domain: &str) -> Vec<String> {
    lookup_records(adapter, domain, RecordKind::Txt).await
}
