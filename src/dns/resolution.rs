//! Target classification and hostname resolution.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Error, Result};
use hickory_resolver::TokioAsyncResolver;

use crate::models::{Target, TargetKind};

/// Resolves a hostname to an IP address using DNS.
///
/// # Arguments
///
/// * `host` - The hostname to resolve
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// The first IP address found, or an error if resolution fails.
///
/// # Errors
///
/// Returns an error if DNS resolution fails or no IP addresses are found.
pub async fn resolve_host_to_ip(
    host: &str,
    resolver: &TokioAsyncResolver,
) -> Result<String, Error> {
    let response = resolver.lookup_ip(host).await.map_err(Error::new)?;
    let ip = response
        .iter()
        .next()
        .ok_or_else(|| Error::msg("No IP addresses found"))?
        .to_string();
    Ok(ip)
}

/// Result of classifying one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The classified target
    pub target: Target,
    /// Resolved address, or the literal itself for IP targets
    pub address: Option<String>,
}

impl Resolution {
    /// True only for a hostname that resolved.
    ///
    /// An IP literal "resolves" to itself, which says nothing about reachability.
    pub fn is_liveness_evidence(&self) -> bool {
        self.target.kind() == TargetKind::Hostname && self.address.is_some()
    }
}

/// Classifies targets and resolves hostnames, once each, within a timeout.
#[derive(Clone)]
pub struct Resolver {
    inner: Arc<TokioAsyncResolver>,
    timeout: Duration,
}

impl Resolver {
    pub fn new(inner: Arc<TokioAsyncResolver>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// Classifies `target` and, for hostnames, attempts one resolution.
    ///
    /// Resolution failures of every kind (no record, timeout, resolver error)
    /// produce an absent address; they are never returned as errors.
    pub async fn classify(&self, target: &str) -> Resolution {
        let target = Target::classify(target);
        let address = match target.kind() {
            TargetKind::IpLiteral => Some(target.as_str().to_string()),
            TargetKind::Hostname => self.lookup(target.as_str()).await,
        };
        Resolution { target, address }
    }

    async fn lookup(&self, host: &str) -> Option<String> {
        match tokio::time::timeout(self.timeout, resolve_host_to_ip(host, &self.inner)).await {
            Ok(Ok(ip)) => {
                log::debug!("Resolved {host} to {ip}");
                Some(ip)
            }
            Ok(Err(e)) => {
                log::debug!("DNS resolution failed for {host}: {e}");
                None
            }
            Err(_) => {
                log::debug!(
                    "DNS resolution timed out for {host} after {:.1}s",
                    self.timeout.as_secs_f64()
                );
                None
            }
        }
    }
}
