//! DNS resolver initialization.
//!
//! This module provides the function to initialize the DNS resolver with the
//! per-check timeout and no retries.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for hostname lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` and the hosts
/// file on Unix). If it cannot be read, falls back to the library default
/// upstream servers and logs a warning.
///
/// Options are overridden so a lookup is attempted exactly once per target:
/// a single attempt bounded by `timeout`, no positive/negative caching beyond
/// the run, and `ndots = 0` so search domains are never appended.
pub fn init_resolver(timeout: Duration) -> Arc<TokioAsyncResolver> {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration ({e}), using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = timeout;
    opts.attempts = 1;
    opts.ndots = 0;
    opts.cache_size = 0;

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}
