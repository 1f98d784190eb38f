//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureType, ProbeStats};

/// Logs per-dimension failure counts at the end of a run.
///
/// Nothing is logged when every check succeeded.
pub fn print_failure_statistics(stats: &ProbeStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    info!("Failed checks ({} total):", total);
    for failure_type in FailureType::iter() {
        let count = stats.count(failure_type);
        if count > 0 {
            info!("   {}: {}", failure_type.as_str(), count);
        }
    }
}
