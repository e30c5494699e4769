//! Report structures for timing statistics.
//!
//! Schema is versioned so JSON reports can evolve.

use super::summary::{PairingPolicy, SummaryStats};
use serde::{Deserialize, Serialize};

/// One labelled series with its statistics, fixed at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSeries {
    /// "Client", "Server" or "Total"
    pub label: String,

    /// Durations in milliseconds, document order
    pub samples: Vec<f64>,

    pub stats: SummaryStats,
}

impl TimingSeries {
    pub fn new(label: impl Into<String>, samples: Vec<f64>) -> Self {
        let stats = SummaryStats::from_samples(&samples);
        Self {
            label: label.into(),
            samples,
            stats,
        }
    }
}

/// Top-level timing report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Log file the samples came from
    pub source: String,

    /// Encoding the log was decoded with
    pub encoding: String,

    pub pairing: PairingPolicy,

    /// Whether the first client sample was discarded
    pub skip_first_client: bool,

    pub client: TimingSeries,
    pub server: TimingSeries,
    pub total: TimingSeries,

    /// Timestamp when report was generated
    pub generated_at: String,
}

impl TimingReport {
    /// Series in reporting order: client, server, total
    pub fn series(&self) -> [&TimingSeries; 3] {
        [&self.client, &self.server, &self.total]
    }
}
