//! Progress logging utilities.

use log::info;

/// Logs progress information about target processing.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Targets finished so far
/// * `total` - Targets submitted for probing
/// * `live` - Targets classified live so far
pub fn log_progress(start_time: std::time::Instant, completed: usize, total: usize, live: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {}/{} targets ({} live) in {:.2} seconds (~{:.2} targets/sec)",
        completed, total, live, elapsed_secs, rate
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_progress_at_start_does_not_divide_by_zero() {
        log_progress(std::time::Instant::now(), 0, 0, 0);
    }

    #[test]
    fn test_log_progress_with_counts() {
        let start = std::time::Instant::now() - std::time::Duration::from_secs(2);
        log_progress(start, 10, 40, 3);
    }
}
