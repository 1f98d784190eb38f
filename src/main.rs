//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `livecheck` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use livecheck::initialization::init_logger_with;
use livecheck::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_scan(config).await {
        Ok(report) => {
            log::info!(
                "Checked {} target{} ({} live) in {:.1}s",
                report.completed,
                if report.completed == 1 { "" } else { "s" },
                report.live_targets,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("livecheck error: {:#}", e);
            process::exit(1);
        }
    }
}
