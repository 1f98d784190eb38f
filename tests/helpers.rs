// Shared test helpers for target files and scan configuration.

use std::io::Write;
use std::path::Path;

use livecheck::{Config, LogFormat, LogLevel};
use tempfile::NamedTempFile;

/// Writes one target per line to a temporary file.
pub fn write_targets_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write target");
    }
    file.flush().expect("Failed to flush file");
    file
}

#[allow(dead_code)] // Used by other test files
/// Builds a quiet, fast configuration probing the given ports.
pub fn create_test_config(file: &Path, http_port: u16, https_port: u16) -> Config {
    let mut config = Config::new(file);
    config.workers = 4;
    config.timeout = 1.0;
    config.http_port = http_port;
    config.https_port = https_port;
    config.user_agent = "livecheck_test/1.0".to_string();
    config.log_level = LogLevel::Error;
    config.log_format = LogFormat::Plain;
    config
}

#[allow(dead_code)]
/// Returns a loopback port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener.local_addr().expect("No local address").port()
}
