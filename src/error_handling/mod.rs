//! Error handling and probe statistics.
//!
//! This module provides:
//! - Fatal error types (initialization, configuration, target file)
//! - Per-dimension soft failure categories
//! - Failure tallies for the run summary

mod stats;
mod types;

// Re-export public API
pub use stats::ProbeStats;
pub use types::{ConfigError, FailureType, InitializationError, TargetFileError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProbeResult, Target};
    use strum::IntoEnumIterator;

    #[test]
    fn test_probe_stats_initialization() {
        let stats = ProbeStats::new();
        for failure in FailureType::iter() {
            assert_eq!(stats.count(failure), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_probe_stats_increment() {
        let mut stats = ProbeStats::new();
        stats.increment(FailureType::HttpUnreachable);
        stats.increment(FailureType::HttpUnreachable);
        stats.increment(FailureType::DnsUnresolved);
        assert_eq!(stats.count(FailureType::HttpUnreachable), 2);
        assert_eq!(stats.count(FailureType::DnsUnresolved), 1);
        assert_eq!(stats.count(FailureType::HttpsUnreachable), 0);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_record_unreachable_hostname() {
        let mut stats = ProbeStats::new();
        let result = ProbeResult::new(Target::classify("gone.invalid"), None, None, None);
        stats.record(&result);
        assert_eq!(stats.count(FailureType::DnsUnresolved), 1);
        assert_eq!(stats.count(FailureType::HttpUnreachable), 1);
        assert_eq!(stats.count(FailureType::HttpsUnreachable), 1);
    }

    #[test]
    fn test_record_ip_literal_never_counts_dns() {
        let mut stats = ProbeStats::new();
        let target = Target::classify("203.0.113.5");
        let result = ProbeResult::new(target, Some("203.0.113.5".into()), Some(200), None);
        stats.record(&result);
        assert_eq!(stats.count(FailureType::DnsUnresolved), 0);
        assert_eq!(stats.count(FailureType::HttpUnreachable), 0);
        assert_eq!(stats.count(FailureType::HttpsUnreachable), 1);
    }

    #[test]
    fn test_failure_type_display() {
        assert_eq!(FailureType::DnsUnresolved.to_string(), "DNS unresolved");
        assert_eq!(FailureType::HttpsUnreachable.to_string(), "HTTPS unreachable");
    }

    #[test]
    fn test_target_file_error_messages() {
        let err = TargetFileError::NotFound("missing.txt".into());
        assert_eq!(err.to_string(), "File not found: missing.txt");

        let err = TargetFileError::Unreadable {
            path: "locked.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Failed to read locked.txt"));
    }
}
