//! Renderers for timing reports.
//!
//! - Summary lines (default)
//! - Per-run table
//! - JSON

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string};
pub use text::{format_float, render_stats, render_summary, render_table};

use crate::stats::TimingReport;
use crate::utils::error::StatsError;

/// How `stats` prints its report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One key-value line per series
    #[default]
    Text,
    /// Averages, std devs and every paired run
    Table,
    /// Full report as JSON
    Json,
}

/// Render `report` in `format`
pub fn render_report(report: &TimingReport, format: ReportFormat) -> Result<String, StatsError> {
    match format {
        ReportFormat::Text => Ok(render_summary(report)),
        ReportFormat::Table => Ok(render_table(report)),
        ReportFormat::Json => report_to_string(report),
    }
}
