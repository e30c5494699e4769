//! Stats command implementation.
//!
//! The stats command:
//! 1. Picks an encoding detector (sniffing or forced label)
//! 2. Reads and decodes the log
//! 3. Extracts and pairs client/server timings
//! 4. Prints the report

use super::models::StatsArgs;
use crate::encoding::{EncodingDetector, FixedEncoding, SniffingDetector};
use crate::output::render_report;
use crate::stats::analyze_file;
use anyhow::{Context, Result};
use log::{debug, info};

/// Execute the stats command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unknown `--encoding` label
/// * Unreadable log, undetectable encoding or malformed bytes
/// * Unequal sample counts under strict pairing
pub fn execute_stats(args: StatsArgs) -> Result<()> {
    validate_stats_args(&args)?;

    let detector: Box<dyn EncodingDetector> = match &args.encoding {
        Some(label) => {
            debug!("Forcing encoding: {}", label);
            Box::new(FixedEncoding::from_label(label)?)
        }
        None => Box::new(SniffingDetector),
    };

    let report = analyze_file(&args.log_file, detector.as_ref(), args.options)
        .with_context(|| format!("Failed to analyze timing log {}", args.log_file.display()))?;

    info!(
        "{} client / {} server / {} paired sample(s) ({})",
        report.client.stats.count,
        report.server.stats.count,
        report.total.stats.count,
        report.encoding
    );

    println!("{}", render_report(&report, args.format)?);
    Ok(())
}

/// Validate stats arguments
///
/// **Public** - can be called before execute_stats for early validation
pub fn validate_stats_args(args: &StatsArgs) -> Result<()> {
    if args.log_file.as_os_str().is_empty() {
        anyhow::bail!("Log file path cannot be empty");
    }

    if args.log_file.is_dir() {
        anyhow::bail!("Log file path is a directory: {}", args.log_file.display());
    }

    Ok(())
}
