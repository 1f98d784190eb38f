//! HTTP and HTTPS reachability probes.
//!
//! A probe issues one GET (following redirects), keeps only the final status
//! code and drops the response before the body is read, which closes the
//! connection. Any failure to obtain a status is `ProbeOutcome::Unreachable`.

mod request_url;

use std::sync::Arc;

use crate::config::Config;
use crate::models::{ProbeOutcome, Protocol, Target};

pub use request_url::build_probe_url;

/// Issues HTTP(S) probes with a shared, non-pooling client.
#[derive(Clone)]
pub struct Prober {
    client: Arc<reqwest::Client>,
    http_port: u16,
    https_port: u16,
}

impl Prober {
    pub fn new(client: Arc<reqwest::Client>, http_port: u16, https_port: u16) -> Self {
        Self {
            client,
            http_port,
            https_port,
        }
    }

    /// Builds a prober using the ports from `config`.
    pub fn from_config(client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self::new(client, config.http_port, config.https_port)
    }

    /// Port probed for `protocol`.
    pub fn port_for(&self, protocol: Protocol) -> u16 {
        match protocol {
            Protocol::Http => self.http_port,
            Protocol::Https => self.https_port,
        }
    }

    /// Probes `target` once over `protocol`.
    ///
    /// Timeouts, refused connections, TLS failures and lookup failures inside
    /// the client all yield `Unreachable`; the cause is only logged.
    pub async fn probe(&self, target: &Target, protocol: Protocol) -> ProbeOutcome {
        let url = match build_probe_url(protocol, target, self.port_for(protocol)) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("Cannot build {protocol} URL for {target}: {e}");
                return ProbeOutcome::Unreachable;
            }
        };

        match self.client.get(url.clone()).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                // Dropping the unread response closes the connection
                drop(response);
                log::debug!("{url} answered {status}");
                ProbeOutcome::Status(status)
            }
            Err(e) => {
                log::debug!("{url} unreachable: {e}");
                ProbeOutcome::Unreachable
            }
        }
    }
}
