//! Timing statistics for diagram benchmark logs.
//!
//! This module handles:
//! - Extracting client and server timings from log text
//! - Pairing them into per-run totals
//! - Count, mean and sample standard deviation per series

pub mod analyze;
pub mod extract;
pub mod schema;
pub mod summary;

// Re-export main types
pub use analyze::{analyze_file, analyze_text, StatsOptions};
pub use extract::{extract_times, TimingSource};
pub use schema::{TimingReport, TimingSeries};
pub use summary::{pair_totals, PairingPolicy, SummaryStats};
