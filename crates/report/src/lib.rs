//! # Cosmic Smoke Report
//!
//! Records the verdict of every check in a run.

mod run_log;

pub use run_log::{CheckRecord, RunLog, RunStats, Verdict};
