//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, ports, intervals)
//! - CLI option types and parsing
//! - Configuration validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
