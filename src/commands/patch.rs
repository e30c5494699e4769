//! Patch command implementation.
//!
//! Failures are reported on stdout as user-facing messages rather than
//! propagated, so the caller only needs the final status.

use super::models::{PatchArgs, PatchStatus};
use crate::patch::{patch_content, patch_file, read_document, PatchOutcome};
use crate::utils::error::PatchError;
use log::{debug, info};

/// Execute the patch command
///
/// **Public** - main entry point called from main.rs
pub fn execute_patch(args: &PatchArgs) -> PatchStatus {
    let result = if args.dry_run || args.check {
        preview(args)
    } else {
        apply(args)
    };

    match result {
        Ok(status) => status,
        Err(err) => {
            report_error(&err);
            PatchStatus::Failed
        }
    }
}

fn apply(args: &PatchArgs) -> Result<PatchStatus, PatchError> {
    let outcome = patch_file(&args.html_file, &args.rules)?;
    log_outcome(&outcome);

    println!(
        "Updated import paths and disabled elements in {}",
        args.html_file.display()
    );

    Ok(if outcome.changed {
        PatchStatus::Patched
    } else {
        PatchStatus::Unchanged
    })
}

fn preview(args: &PatchArgs) -> Result<PatchStatus, PatchError> {
    let content = read_document(&args.html_file)?;
    let (patched, outcome) = patch_content(&content, &args.rules)?;
    log_outcome(&outcome);

    if args.check {
        return Ok(if outcome.changed {
            println!(
                "{} needs patching ({} substitution(s))",
                args.html_file.display(),
                outcome.total()
            );
            PatchStatus::Pending
        } else {
            println!("{} is already patched", args.html_file.display());
            PatchStatus::Unchanged
        });
    }

    print!("{patched}");
    Ok(if outcome.changed {
        PatchStatus::Patched
    } else {
        PatchStatus::Unchanged
    })
}

fn log_outcome(outcome: &PatchOutcome) {
    for rule in &outcome.rules {
        debug!("  {}: {}", rule.rule, rule.count);
    }
    info!("{} substitution(s) applied", outcome.total());
}

fn report_error(err: &PatchError) {
    match err {
        PatchError::NotFound(_) => println!("Error: {err}"),
        _ => println!("An error occurred: {err}"),
    }
}
