//! In-place patching of exported diagram pages.
//!
//! Exported pages reference assets from the server root (`/css`, `/js`) and
//! keep their interactive controls live. Patching makes them work from a
//! sibling directory and disables the controls:
//! 1. Prefix rewrites (`href="/css` -> `href="../css`, `src="/js` -> `src="../js`)
//! 2. `disabled` appended to the tags with the configured ids
//!
//! Rules run in that order against the evolving text.

pub mod rules;
pub mod writer;

pub use rules::{DisableRule, PatchRules, PrefixRule};
pub use writer::{read_document, write_atomic};

use crate::utils::error::PatchError;
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// How many substitutions one rule made
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCount {
    pub rule: String,
    pub count: usize,
}

/// Result of running a rule set over a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatchOutcome {
    /// One entry per rule, in application order
    pub rules: Vec<RuleCount>,

    /// Whether the output differs from the input
    pub changed: bool,
}

impl PatchOutcome {
    pub fn total(&self) -> usize {
        self.rules.iter().map(|r| r.count).sum()
    }
}

/// Apply every rule to `content`
///
/// **Public** - pure entry point, no I/O
///
/// # Errors
/// * `PatchError::InvalidRule` - A configured element id cannot be matched
pub fn patch_content(content: &str, rules: &PatchRules) -> Result<(String, PatchOutcome), PatchError> {
    let mut current = content.to_string();
    let mut outcome = PatchOutcome::default();

    for rule in &rules.prefix_rules {
        let (next, count) = rule.apply(&current);
        debug!("{}: {} replacement(s)", rule.describe(), count);
        outcome.rules.push(RuleCount {
            rule: rule.describe(),
            count,
        });
        current = next;
    }

    for rule in rules.disable_rules()? {
        let (next, count) = rule.apply(&current);
        debug!("{}: {} tag(s)", rule.describe(), count);
        outcome.rules.push(RuleCount {
            rule: rule.describe(),
            count,
        });
        current = next;
    }

    outcome.changed = current != content;
    Ok((current, outcome))
}

/// Patch the file at `path` in place
///
/// **Public** - main entry point for the patch command
///
/// The file is only rewritten when the content actually changes.
///
/// # Errors
/// * `PatchError::NotFound` - `path` does not exist; nothing is written
/// * `PatchError::Io` / `PatchError::Persist` - Read or write failure
pub fn patch_file(path: impl AsRef<Path>, rules: &PatchRules) -> Result<PatchOutcome, PatchError> {
    let path = path.as_ref();
    let content = read_document(path)?;
    let (patched, outcome) = patch_content(&content, rules)?;

    if outcome.changed {
        // Write through symlinks instead of replacing them
        let target = fs::canonicalize(path)?;
        write_atomic(&target, &patched)?;
    } else {
        info!("{} already patched, leaving it untouched", path.display());
    }

    Ok(outcome)
}
