//! Run-time reporting helpers.
//!
//! This module provides progress logging and statistics printing used while a
//! scan runs.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::print_failure_statistics;
