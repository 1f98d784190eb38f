//! Scan orchestration.
//!
//! Wires target loading, the coordinator and the reporter together. Fatal
//! conditions (bad configuration, missing or unreadable targets file) are
//! detected before any output is written.

mod coordinator;
mod task;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;

use crate::app::{log_progress, print_failure_statistics};
use crate::config::{Config, LOGGING_INTERVAL};
use crate::dns::Resolver;
use crate::error_handling::ProbeStats;
use crate::initialization::{init_client, init_resolver};
use crate::probe::Prober;
use crate::report::Reporter;
use crate::targets::read_targets;

pub use coordinator::{Coordinator, DispatchSummary, ProbeStream};

/// Results of a scan run.
///
/// Contains summary statistics about the completed scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Targets submitted for probing (after CIDR filtering)
    pub total_targets: usize,
    /// Input lines skipped as CIDR ranges
    pub skipped_cidr: usize,
    /// Targets whose result reached the reporter
    pub completed: usize,
    /// Targets classified live
    pub live_targets: usize,
    /// Tasks that panicked without producing a result
    pub failed_tasks: usize,
    /// Per-dimension failure tallies
    pub failures: ProbeStats,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a scan, writing rows to stdout and diagnostics to stderr.
///
/// This is the main entry point for the library.
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid
/// - The targets file is missing or unreadable
/// - The HTTP client cannot be initialized
/// - Writing to stdout or stderr fails
///
/// # Example
///
/// ```no_run
/// use livecheck::{run_scan, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let report = run_scan(Config::new("targets.txt")).await?;
/// eprintln!("{} of {} targets live", report.live_targets, report.total_targets);
/// # Ok(())
/// # }
/// ```
pub async fn run_scan(config: Config) -> Result<ScanReport> {
    run_scan_with(config, std::io::stdout(), std::io::stderr()).await
}

/// Runs a scan with explicit output and diagnostic writers.
///
/// # Errors
///
/// Same as [`run_scan`].
pub async fn run_scan_with<O, D>(config: Config, out: O, diag: D) -> Result<ScanReport>
where
    O: Write,
    D: Write,
{
    config.validate().context("Invalid configuration")?;

    let filtered = read_targets(&config.file)
        .await
        .context("Failed to load targets")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let timeout = config.check_timeout();
    let resolver = Resolver::new(init_resolver(timeout), timeout);
    let prober = Prober::from_config(client, &config);
    let coordinator = Coordinator::new(resolver, prober, config.workers);

    let mut reporter = Reporter::new(out, diag);
    reporter
        .scan_started(&config.file, &filtered)
        .context("Failed to write diagnostics")?;
    reporter.write_header().context("Failed to write output")?;

    let total_targets = filtered.targets.len();
    let skipped_cidr = filtered.skipped_cidr;
    info!(
        "Probing {} targets with {} workers ({:.1}s timeout per check, TLS verification {})",
        total_targets,
        coordinator.workers(),
        config.timeout,
        if config.verify_tls { "on" } else { "off" }
    );

    let start_time = Instant::now();
    let mut stream = coordinator.dispatch(filtered.targets);

    let mut interval = tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL));
    // The first tick completes immediately
    interval.tick().await;
    loop {
        tokio::select! {
            next = stream.next() => match next {
                Some(result) => {
                    reporter.record(&result).context("Failed to write output")?;
                }
                None => break,
            },
            _ = interval.tick() => {
                log_progress(start_time, reporter.completed(), total_targets, reporter.live());
            }
        }
    }

    let live_targets = stream.live_count();
    let dispatch = stream.finish().await;
    log_progress(start_time, reporter.completed(), total_targets, live_targets);

    reporter
        .finish(&config.file)
        .context("Failed to write diagnostics")?;
    print_failure_statistics(reporter.stats());

    Ok(ScanReport {
        total_targets,
        skipped_cidr,
        completed: reporter.completed(),
        live_targets,
        failed_tasks: dispatch.panicked,
        failures: reporter.stats().clone(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
