//! Neighbor sweep: reverse lookups of numerically adjacent addresses.

use std::net::Ipv4Addr;

use log::{debug, info};

use super::{run_bounded, SweepOptions};
use crate::dns::{reverse_lookup, ResolverAdapter};
use crate::error_handling::LookupError;
use crate::models::NeighborMap;

/// Computes `base + offset` in the 32-bit address space.
///
/// Fails with [`LookupError::AddressParseError`] if the result falls outside
/// `0.0.0.0 ..= 255.255.255.255`.
pub fn neighbor_address(base: Ipv4Addr, offset: i64) -> Result<Ipv4Addr, LookupError> {
    let value = i64::from(u32::from(base)) + offset;
    u32::try_from(value)
        .map(Ipv4Addr::from)
        .map_err(|_| LookupError::AddressParseError {
            input: format!("{base}{offset:+}"),
        })
}

/// Addresses probed around `base`: offsets `-radius ..= radius` except 0.
///
/// Offsets that leave the address space are skipped.
pub fn neighbor_candidates(base: Ipv4Addr, radius: u32) -> Vec<Ipv4Addr> {
    let radius = i64::from(radius);
    (-radius..=radius)
        .filter(|offset| *offset != 0)
        .filter_map(|offset| match neighbor_address(base, offset) {
            Ok(ip) => Some(ip),
            Err(e) => {
                debug!("Skipping neighbor: {e}");
                None
            }
        })
        .collect()
}

/// Reverse-looks-up every neighbor of `base` within `radius`.
///
/// Only neighbors with at least one PTR name are kept.
pub async fn sweep_neighbors(
    adapter: &ResolverAdapter,
    base: Ipv4Addr,
    radius: u32,
    options: &SweepOptions,
) -> NeighborMap {
    let candidates = neighbor_candidates(base, radius);
    let probed = candidates.len();

    let found: NeighborMap = run_bounded(candidates, options, |ip| async move {
        (ip, reverse_lookup(adapter, ip).await)
    })
    .await
    .into_iter()
    .filter(|(_, names)| !names.is_empty())
    .collect();

    info!(
        "Neighbor sweep around {base}: {} of {probed} addresses resolve",
        found.len()
    );
    found
}
