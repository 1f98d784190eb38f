//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WORKERS, HTTPS_DEFAULT_PORT,
    HTTP_DEFAULT_PORT, MAX_TIMEOUT_SECS, MAX_WORKERS,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Scan configuration and command-line options.
///
/// Parsed by `clap` in the binary, or constructed directly by library callers.
/// There is no default target file: callers must always name one.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// livecheck targets.txt
///
/// # Wider pool, longer timeout, strict TLS
/// livecheck targets.txt --workers 50 --timeout 5 --verify-tls
///
/// # Read targets from stdin
/// cat targets.txt | livecheck -
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "livecheck",
    about = "Checks a targets file for live hosts via DNS, HTTP and HTTPS."
)]
pub struct Config {
    /// Path to the targets file (one host or IP per line, `-` for stdin)
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Number of targets probed concurrently
    #[arg(long, alias = "threads", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Per-check timeout in seconds (DNS, HTTP and HTTPS each)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    /// Verify TLS certificates on HTTPS probes (off by default)
    #[arg(long, alias = "verify-ssl")]
    pub verify_tls: bool,

    /// Port probed over plain HTTP
    #[arg(long, default_value_t = HTTP_DEFAULT_PORT)]
    pub http_port: u16,

    /// Port probed over HTTPS
    #[arg(long, default_value_t = HTTPS_DEFAULT_PORT)]
    pub https_port: u16,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Creates a configuration for `file` with every other option at its default.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            workers: DEFAULT_WORKERS,
            timeout: DEFAULT_TIMEOUT_SECS,
            verify_tls: false,
            http_port: HTTP_DEFAULT_PORT,
            https_port: HTTPS_DEFAULT_PORT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }

    /// Checks option values that clap cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkers);
        }
        if self.workers > MAX_WORKERS {
            return Err(ConfigError::TooManyWorkers(self.workers));
        }
        if self.timeout.is_nan() || self.timeout <= 0.0 || self.timeout > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout(self.timeout));
        }
        if self.http_port == 0 {
            return Err(ConfigError::InvalidPort("http"));
        }
        if self.https_port == 0 {
            return Err(ConfigError::InvalidPort("https"));
        }
        Ok(())
    }

    /// The per-check timeout as a `Duration`.
    ///
    /// Only meaningful after `validate()` has accepted the configuration; an
    /// out-of-range value falls back to `DEFAULT_TIMEOUT_SECS`.
    pub fn check_timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout)
            .unwrap_or_else(|_| Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS))
    }
}
