//! Subdomain sweep over a candidate label dictionary.

use log::info;

use super::{run_bounded, SweepOptions};
use crate::dns::{lookup_a_records, ResolverAdapter};
use crate::models::SubdomainMap;

/// Forms `label.target` for every label, keeping dictionary order.
pub fn candidate_names<S: AsRef<str>>(target: &str, labels: &[S]) -> Vec<String> {
    labels
        .iter()
        .map(|label| format!("{}.{}", label.as_ref(), target))
        .collect()
}

/// Resolves the A records of every candidate subdomain of `target`.
///
/// Only candidates with at least one address are kept.
pub async fn sweep_subdomains<S: AsRef<str>>(
    adapter: &ResolverAdapter,
    target: &str,
    labels: &[S],
    options: &SweepOptions,
) -> SubdomainMap {
    let candidates = candidate_names(target, labels);
    let probed = candidates.len();

    let found: SubdomainMap = run_bounded(candidates, options, |name| async move {
        let addresses = lookup_a_records(adapter, &name).await;
        (name, addresses)
    })
    .await
    .into_iter()
    .filter(|(_, addresses)| !addresses.is_empty())
    .collect();

    info!(
        "Subdomain sweep of {target}: {} of {probed} candidates resolve",
        found.len()
    );
    found
}
