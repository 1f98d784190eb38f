//! Error type definitions.
//!
//! Only fatal conditions are errors. Expected network outcomes (unresolved
//! names, unreachable ports) are values, see `ProbeOutcome` and `Resolution`.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid option values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The worker pool must have at least one slot.
    #[error("worker pool width must be at least 1")]
    InvalidWorkers,

    /// The worker pool is wider than the semaphore can represent.
    #[error("worker pool width {0} exceeds the maximum of {max}", max = crate::config::MAX_WORKERS)]
    TooManyWorkers(usize),

    /// The per-check timeout must be positive and at most `MAX_TIMEOUT_SECS`.
    #[error(
        "timeout must be a positive number of seconds up to {max}, got {0}",
        max = crate::config::MAX_TIMEOUT_SECS
    )]
    InvalidTimeout(f64),

    /// A probe port was zero.
    #[error("{0} port must be between 1 and 65535")]
    InvalidPort(&'static str),
}

/// Failures reading the targets file.
#[derive(Error, Debug)]
pub enum TargetFileError {
    /// The path does not exist or is not a regular file.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Unreadable {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Per-dimension soft failures tallied for the run summary.
///
/// Causes such as refusal, timeout or TLS failure are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureType {
    /// Hostname did not resolve
    DnsUnresolved,
    /// HTTP probe produced no status
    HttpUnreachable,
    /// HTTPS probe produced no status
    HttpsUnreachable,
}

impl std::fmt::Display for FailureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureType::DnsUnresolved => "DNS unresolved",
            FailureType::HttpUnreachable => "HTTP unreachable",
            FailureType::HttpsUnreachable => "HTTPS unreachable",
        }
    }
}
