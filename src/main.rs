//! benchkit CLI
//!
//! Timing statistics for benchmark logs and HTML patching for exported
//! diagram pages.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

use benchkit::commands::{display_version, execute_patch, execute_stats, PatchArgs, StatsArgs};
use benchkit::output::ReportFormat;
use benchkit::stats::{PairingPolicy, StatsOptions};
use benchkit::utils::config::Config;

/// benchkit - benchmark log statistics and page patching
#[derive(Parser, Debug)]
#[command(name = "benchkit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML config file (defaults to ./benchkit.toml if present)
    #[arg(long, global = true, env = "BENCHKIT_CONFIG")]
    config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute client/server/total timing statistics from a log
    Stats {
        /// Log file (defaults to stats.log_file from config, then chord.txt)
        log_file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// How to pair client and server samples of different counts
        #[arg(long, value_enum)]
        pairing: Option<PairingPolicy>,

        /// Discard the first client sample (warm-up load)
        #[arg(long)]
        skip_first_client: bool,

        /// Force an encoding label (e.g. utf-8, latin1) instead of sniffing
        #[arg(long)]
        encoding: Option<String>,
    },

    /// Rewrite asset paths and disable inputs in an HTML file, in place
    Patch {
        /// HTML file to patch
        html_file: PathBuf,

        /// Print the patched document instead of writing it
        #[arg(long, conflicts_with = "check")]
        dry_run: bool,

        /// Exit non-zero if the file still needs patching
        #[arg(long)]
        check: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = Config::discover(cli.config.as_deref()).context("Failed to load config")?;

    // Execute command
    match cli.command {
        Commands::Stats {
            log_file,
            format,
            pairing,
            skip_first_client,
            encoding,
        } => {
            let args = StatsArgs {
                log_file: log_file.unwrap_or(config.stats.log_file),
                format,
                options: StatsOptions {
                    pairing: pairing.unwrap_or(config.stats.pairing),
                    skip_first_client: skip_first_client || config.stats.skip_first_client,
                },
                encoding: encoding.or(config.stats.encoding),
            };

            execute_stats(args)?;
        }

        Commands::Patch {
            html_file,
            dry_run,
            check,
        } => {
            let args = PatchArgs {
                html_file,
                rules: config.patch,
                dry_run,
                check,
            };

            if !execute_patch(&args).is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(ExitCode::SUCCESS)
}
