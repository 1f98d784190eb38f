//! Configuration constants.
//!
//! Defaults for the CLI options plus the fixed operational parameters of a scan.

/// Default worker pool width (maximum concurrent target tasks).
pub const DEFAULT_WORKERS: usize = 10;

/// Largest accepted worker pool width (the semaphore's permit limit).
pub const MAX_WORKERS: usize = tokio::sync::Semaphore::MAX_PERMITS;

/// Default per-check timeout in seconds.
///
/// Applied independently to the DNS lookup, the HTTP probe and the HTTPS probe,
/// so a single target task is bounded by three times this value.
pub const DEFAULT_TIMEOUT_SECS: f64 = 2.0;

/// Largest accepted per-check timeout in seconds (one day).
pub const MAX_TIMEOUT_SECS: f64 = 86_400.0;

/// Conventional port for plain HTTP.
pub const HTTP_DEFAULT_PORT: u16 = 80;
/// Conventional port for HTTPS.
pub const HTTPS_DEFAULT_PORT: u16 = 443;

/// Interval between progress log lines, in seconds.
pub const LOGGING_INTERVAL: u64 = 5;

/// Maximum number of redirect hops followed by a probe.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent string for probe requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("livecheck/", env!("CARGO_PKG_VERSION"));

/// Width of the dashed rule printed under the output header.
pub const HEADER_RULE_WIDTH: usize = 60;
