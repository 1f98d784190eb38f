//! livecheck library: concurrent target liveness probing
//!
//! Given a list of candidate hosts, determines which are reachable through DNS
//! resolution and HTTP/HTTPS checks, using a bounded worker pool and reporting
//! results as they complete.
//!
//! # Example
//!
//! ```no_run
//! use livecheck::{run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = Config::new("targets.txt");
//! config.workers = 25;
//! config.timeout = 3.0;
//!
//! let report = run_scan(config).await?;
//! eprintln!(
//!     "{} live of {} targets ({} CIDRs skipped)",
//!     report.live_targets, report.total_targets, report.skipped_cidr
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod probe;
pub mod report;
mod run;
pub mod targets;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ConfigError, ProbeStats, TargetFileError};
pub use models::{ProbeOutcome, ProbeResult, Protocol, Target, TargetKind};
pub use run::{run_scan, run_scan_with, Coordinator, DispatchSummary, ProbeStream, ScanReport};
