use crate::output::ReportFormat;
use crate::patch::PatchRules;
use crate::stats::StatsOptions;
use crate::utils::config::DEFAULT_LOG_FILE;
use std::path::PathBuf;

/// Arguments for the stats command
///
/// **Public** - used by main.rs to construct from CLI args and config
#[derive(Debug, Clone)]
pub struct StatsArgs {
    /// Timing log to analyze
    pub log_file: PathBuf,

    /// Output format
    pub format: ReportFormat,

    /// Pairing policy and warm-up handling
    pub options: StatsOptions,

    /// Forced WHATWG encoding label (None = sniff)
    pub encoding: Option<String>,
}

impl Default for StatsArgs {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            format: ReportFormat::Text,
            options: StatsOptions::default(),
            encoding: None,
        }
    }
}

/// Arguments for the patch command
#[derive(Debug, Clone, Default)]
pub struct PatchArgs {
    /// HTML file to patch in place
    pub html_file: PathBuf,

    /// Substitutions to apply
    pub rules: PatchRules,

    /// Print the patched document instead of writing it
    pub dry_run: bool,

    /// Only report whether the file would change
    pub check: bool,
}

/// What a patch run ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
    /// File rewritten (or printed, for a dry run)
    Patched,
    /// Nothing to change
    Unchanged,
    /// `--check` found substitutions still to apply
    Pending,
    /// Missing file or I/O failure; message already printed
    Failed,
}

impl PatchStatus {
    pub fn is_success(self) -> bool {
        matches!(self, PatchStatus::Patched | PatchStatus::Unchanged)
    }
}
