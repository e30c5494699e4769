//! Textual substitution rules for exported diagram pages.
//!
//! Nothing here parses HTML. Rules match literal text, so a prefix rule for
//! `/css` rewrites `href="/cssx/foo"` just as it rewrites `href="/css/a.css"`.

use crate::utils::config::{DEFAULT_DISABLED_IDS, DEFAULT_PREFIX_RULES};
use crate::utils::error::PatchError;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

const DISABLED: &str = "disabled";

/// Rewrite `attribute="<from>` to `attribute="<to>`, keeping the rest of the value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    pub attribute: String,
    pub from: String,
    pub to: String,
}

impl PrefixRule {
    pub fn new(attribute: &str, from: &str, to: &str) -> Self {
        Self {
            attribute: attribute.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn needle(&self) -> String {
        format!("{}=\"{}", self.attribute, self.from)
    }

    /// Human-readable name used in logs and outcomes
    pub fn describe(&self) -> String {
        format!("{}=\"{} -> {}=\"{}", self.attribute, self.from, self.attribute, self.to)
    }

    /// Apply to `content`, returning the new text and the number of rewrites
    pub fn apply(&self, content: &str) -> (String, usize) {
        let needle = self.needle();
        let count = content.matches(needle.as_str()).count();
        if count == 0 {
            return (content.to_string(), 0);
        }

        let replacement = format!("{}=\"{}", self.attribute, self.to);
        (content.replace(needle.as_str(), &replacement), count)
    }
}

/// Append ` disabled` to every tag carrying `id="<id>"`
///
/// A tag whose text already ends in `disabled` right before `>` is left
/// alone, which makes the rule idempotent.
#[derive(Debug, Clone)]
pub struct DisableRule {
    id: String,
    pattern: Regex,
}

impl DisableRule {
    pub fn new(id: &str) -> Result<Self, PatchError> {
        if id.is_empty() {
            return Err(PatchError::InvalidRule("element id cannot be empty".to_string()));
        }

        let pattern = Regex::new(&format!(r#"<[^>]*\bid="{}"[^>]*>"#, regex::escape(id)))
            .map_err(|e| PatchError::InvalidRule(e.to_string()))?;

        Ok(Self {
            id: id.to_string(),
            pattern,
        })
    }

    pub fn describe(&self) -> String {
        format!("disable id=\"{}\"", self.id)
    }

    /// Apply to `content`, returning the new text and the number of tags changed
    pub fn apply(&self, content: &str) -> (String, usize) {
        let mut count = 0;
        let patched = self.pattern.replace_all(content, |caps: &Captures| {
            let tag = &caps[0];
            let body = &tag[..tag.len() - 1];
            if body.ends_with(DISABLED) {
                tag.to_string()
            } else {
                count += 1;
                format!("{body} {DISABLED}>")
            }
        });

        (patched.into_owned(), count)
    }
}

/// Full rule set: every prefix rule, then every disabled id, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchRules {
    pub prefix_rules: Vec<PrefixRule>,
    pub disabled_ids: Vec<String>,
}

impl Default for PatchRules {
    fn default() -> Self {
        Self {
            prefix_rules: DEFAULT_PREFIX_RULES
                .iter()
                .map(|(attribute, from, to)| PrefixRule::new(attribute, from, to))
                .collect(),
            disabled_ids: DEFAULT_DISABLED_IDS.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl PatchRules {
    /// Compile the disabled ids into matchers
    pub fn disable_rules(&self) -> Result<Vec<DisableRule>, PatchError> {
        self.disabled_ids.iter().map(|id| DisableRule::new(id)).collect()
    }
}
