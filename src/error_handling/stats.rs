//! Probe failure statistics.
//!
//! Tallies soft failures per dimension. The tally has a single owner (the loop
//! consuming results) and is a plain map.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::FailureType;
use crate::models::{ProbeResult, TargetKind};

/// Per-dimension failure counters for one run.
///
/// All failure types are initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct ProbeStats {
    failures: HashMap<FailureType, usize>,
}

impl Default for ProbeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for failure in FailureType::iter() {
            failures.insert(failure, 0);
        }
        ProbeStats { failures }
    }

    /// Increment a failure counter.
    pub fn increment(&mut self, failure: FailureType) {
        *self.failures.entry(failure).or_insert(0) += 1;
    }

    /// Records every failed dimension of a completed result.
    ///
    /// IP literals never attempt resolution, so they never count as DNS failures.
    pub fn record(&mut self, result: &ProbeResult) {
        if result.kind() == TargetKind::Hostname && result.dns().is_none() {
            self.increment(FailureType::DnsUnresolved);
        }
        if result.http_status().is_none() {
            self.increment(FailureType::HttpUnreachable);
        }
        if result.https_status().is_none() {
            self.increment(FailureType::HttpsUnreachable);
        }
    }

    pub fn count(&self, failure: FailureType) -> usize {
        self.failures.get(&failure).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.failures.values().sum()
    }
}
