//! DNS classification and resolution.
//!
//! This module provides async name resolution using `hickory-resolver`:
//! - IP literal vs. hostname classification
//! - Single-attempt forward lookups (A/AAAA) bounded by the per-check timeout
//!
//! Unresolvable names are an ordinary outcome, represented as an absent address.

mod resolution;

// Re-export public API
pub use resolution::{resolve_host_to_ip, Resolution, Resolver};
