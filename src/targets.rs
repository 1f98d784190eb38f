//! Target list parsing.
//!
//! Turns raw input lines into candidate target strings: whitespace is trimmed,
//! blank lines are dropped, and anything in CIDR notation (any line containing
//! `/`) is counted and excluded. Order and duplicates are preserved.

use std::path::Path;

use tokio::io::AsyncReadExt;

use crate::error_handling::TargetFileError;

/// Candidate targets plus the number of CIDR lines that were excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredTargets {
    /// Surviving target strings, in input order
    pub targets: Vec<String>,
    /// Number of non-blank lines excluded as CIDR ranges
    pub skipped_cidr: usize,
}

impl FilteredTargets {
    /// Number of non-blank input lines seen (targets plus skipped CIDRs).
    pub fn total_lines(&self) -> usize {
        self.targets.len() + self.skipped_cidr
    }
}

/// Returns true if the entry is written in CIDR notation.
pub fn is_cidr(entry: &str) -> bool {
    entry.contains('/')
}

/// Filters raw lines into candidate targets.
///
/// # Examples
///
/// ```
/// use livecheck::targets::filter_targets;
///
/// let filtered = filter_targets(["example.com", "10.0.0.0/8", "  203.0.113.5 ", ""]);
/// assert_eq!(filtered.targets, vec!["example.com", "203.0.113.5"]);
/// assert_eq!(filtered.skipped_cidr, 1);
/// ```
pub fn filter_targets<I, S>(lines: I) -> FilteredTargets
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut filtered = FilteredTargets::default();
    for line in lines {
        let trimmed = line.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_cidr(trimmed) {
            filtered.skipped_cidr += 1;
            continue;
        }
        filtered.targets.push(trimmed.to_string());
    }
    filtered
}

/// Reads and filters a targets file.
///
/// The path `-` reads from standard input instead.
///
/// # Errors
///
/// Returns `TargetFileError::NotFound` if the path is not an existing file and
/// `TargetFileError::Unreadable` for any other I/O failure (including content
/// that is not valid UTF-8).
pub async fn read_targets(path: &Path) -> Result<FilteredTargets, TargetFileError> {
    let contents = if path.as_os_str() == "-" {
        log::debug!("Reading targets from stdin");
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .map_err(|source| TargetFileError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(TargetFileError::NotFound(path.to_path_buf())),
        }
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| TargetFileError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?
    };
    Ok(filter_targets(contents.lines()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_filter_excludes_cidr_and_counts_it() {
        let filtered = filter_targets(["example.com", "10.0.0.0/8", "203.0.113.5"]);
        assert_eq!(filtered.targets, vec!["example.com", "203.0.113.5"]);
        assert_eq!(filtered.skipped_cidr, 1);
        assert_eq!(filtered.total_lines(), 3);
    }

    #[test]
    fn test_filter_trims_and_drops_blank_lines() {
        let filtered = filter_targets(["  host.example  ", "", "   ", "\t\t", "\tother.example"]);
        assert_eq!(filtered.targets, vec!["host.example", "other.example"]);
        assert_eq!(filtered.skipped_cidr, 0);
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        let filtered = filter_targets(["b.example", "a.example", "b.example"]);
        assert_eq!(filtered.targets, vec!["b.example", "a.example", "b.example"]);
    }

    #[test]
    fn test_any_slash_is_cidr() {
        // Not a valid network, still excluded
        let filtered = filter_targets(["2001:db8::/32", "odd/entry", "host/"]);
        assert!(filtered.targets.is_empty());
        assert_eq!(filtered.skipped_cidr, 3);
    }

    #[test]
    fn test_is_cidr() {
        assert!(is_cidr("192.168.0.0/16"));
        assert!(!is_cidr("192.168.0.1"));
        assert!(!is_cidr("example.com"));
    }

    #[tokio::test]
    async fn test_read_targets_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "example.com").unwrap();
        writeln!(file, "10.0.0.0/8").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "203.0.113.5").unwrap();
        file.flush().unwrap();

        let filtered = read_targets(file.path()).await.unwrap();
        assert_eq!(filtered.targets, vec!["example.com", "203.0.113.5"]);
        assert_eq!(filtered.skipped_cidr, 1);
    }

    #[tokio::test]
    async fn test_read_targets_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("targets_missing.txt");
        let err = read_targets(&missing).await.unwrap_err();
        assert!(matches!(err, TargetFileError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_read_targets_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_targets(dir.path()).await.unwrap_err();
        assert!(matches!(err, TargetFileError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_read_targets_invalid_utf8_is_unreadable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd, b'\n']).unwrap();
        file.flush().unwrap();
        let err = read_targets(file.path()).await.unwrap_err();
        assert!(matches!(err, TargetFileError::Unreadable { .. }));
    }
}
