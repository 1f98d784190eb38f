//! Result rendering.
//!
//! Data rows go to the output writer (stdout in the binary); scan counts and
//! the closing summary go to the diagnostic writer (stderr). The two are
//! separate writers, so diagnostics can never land between data rows.

use std::io::{self, Write};
use std::path::Path;

use crate::config::HEADER_RULE_WIDTH;
use crate::error_handling::ProbeStats;
use crate::models::ProbeResult;
use crate::targets::FilteredTargets;

/// Header row of the output table.
pub const HEADER: &str = "Target | DNS IP | HTTP Status | HTTPS Status";

/// Formats the output row for a result.
///
/// Missing DNS is shown as `N/A`, missing statuses as `No`.
pub fn format_row(result: &ProbeResult) -> String {
    let status = |code: Option<u16>| code.map_or_else(|| "No".to_string(), |c| c.to_string());
    format!(
        "{} | {} | {} | {}",
        result.target(),
        result.dns().unwrap_or("N/A"),
        status(result.http_status()),
        status(result.https_status())
    )
}

/// Consumes completed results and keeps the run tallies.
pub struct Reporter<O: Write, D: Write> {
    out: O,
    diag: D,
    completed: usize,
    live: usize,
    stats: ProbeStats,
}

impl<O: Write, D: Write> Reporter<O, D> {
    pub fn new(out: O, diag: D) -> Self {
        Self {
            out,
            diag,
            completed: 0,
            live: 0,
            stats: ProbeStats::new(),
        }
    }

    /// Announces the scan and its target counts on the diagnostic stream.
    pub fn scan_started(&mut self, source: &Path, filtered: &FilteredTargets) -> io::Result<()> {
        writeln!(self.diag, "Scanning targets in {}...", source.display())?;
        writeln!(
            self.diag,
            "Found {} individual hosts/IPs to check (skipped {} CIDRs).",
            filtered.targets.len(),
            filtered.skipped_cidr
        )?;
        self.diag.flush()
    }

    /// Writes the table header and rule to the output stream.
    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HEADER}")?;
        writeln!(self.out, "{}", "-".repeat(HEADER_RULE_WIDTH))?;
        self.out.flush()
    }

    /// Tallies a completed result and writes its row if it is live.
    ///
    /// Returns whether a row was written.
    pub fn record(&mut self, result: &ProbeResult) -> io::Result<bool> {
        self.completed += 1;
        self.stats.record(result);
        if !result.is_live() {
            return Ok(false);
        }
        self.live += 1;
        writeln!(self.out, "{}", format_row(result))?;
        self.out.flush()?;
        Ok(true)
    }

    /// Writes the closing summary to the diagnostic stream.
    pub fn finish(&mut self, source: &Path) -> io::Result<()> {
        writeln!(
            self.diag,
            "Finished {}. Found {} live targets. Output printed to stdout.",
            source.display(),
            self.live
        )?;
        self.diag.flush()
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn live(&self) -> usize {
        self.live
    }

    pub fn stats(&self) -> &ProbeStats {
        &self.stats
    }

    /// Releases the writers.
    pub fn into_inner(self) -> (O, D) {
        (self.out, self.diag)
    }
}
