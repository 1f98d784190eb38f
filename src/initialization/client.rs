//! HTTP client initialization.
//!
//! This module provides the function to initialize the HTTP client shared by all
//! probe tasks.

use std::sync::Arc;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for probes.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-check timeout covering connect, TLS, redirects and headers
/// - Redirect following (up to `MAX_REDIRECT_HOPS`)
/// - No idle connection pooling, so every probe owns its connection and
///   releases it as soon as the response is dropped
/// - Certificate validation only when `verify_tls` is set
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let timeout = config.check_timeout();
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .pool_max_idle_per_host(0)
        .danger_accept_invalid_certs(!config.verify_tls)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
