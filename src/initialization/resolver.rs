//! DNS resolver initialization.
//!
//! This module builds the production query backend with the per-query timeout
//! configuration.

use std::sync::Arc;
use std::time::Duration;

use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;
use crate::dns::{DnsBackend, TrustDnsBackend};

/// Builds the resolver options used for every scan query.
///
/// Caching is disabled, so a repeated scan reflects the live zone.
pub fn resolver_opts(timeout: Duration) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    // Query the name as given before any search-list expansion
    opts.ndots = 0;
    opts.cache_size = 0;
    opts
}

/// Initializes the DNS backend for scan lookups.
///
/// Uses the default upstream configuration (Google public DNS) with the given
/// per-query timeout. The backend answers forward and reverse (PTR) queries.
pub fn init_backend(timeout: Duration) -> Arc<dyn DnsBackend> {
    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), resolver_opts(timeout));
    Arc::new(TrustDnsBackend::new(resolver))
}
