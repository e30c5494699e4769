//! Configuration and constants for the CLI.

use crate::patch::PatchRules;
use crate::stats::PairingPolicy;
use crate::utils::error::ConfigError;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Log file read by `stats` when none is given
pub const DEFAULT_LOG_FILE: &str = "chord.txt";

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "benchkit.toml";

// Timing line markers as printed by the diagram server
pub const CLIENT_MARKER: &str = "Client time";
pub const SERVER_MARKER: &str = "Server time";

/// Asset prefix rewrites applied by `patch`: (attribute, from, to)
pub const DEFAULT_PREFIX_RULES: &[(&str, &str, &str)] =
    &[("href", "/css", "../css"), ("src", "/js", "../js")];

/// Element ids that `patch` marks as disabled
pub const DEFAULT_DISABLED_IDS: &[&str] = &["expressionInput", "cola"];

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub stats: StatsConfig,
    pub patch: PatchRules,
}

/// `[stats]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Log file to analyze
    pub log_file: PathBuf,

    /// How client and server samples are combined into totals
    pub pairing: PairingPolicy,

    /// Drop the first client sample (warm-up page load)
    pub skip_first_client: bool,

    /// Force a WHATWG encoding label instead of sniffing
    pub encoding: Option<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            pairing: PairingPolicy::default(),
            skip_first_client: false,
            encoding: None,
        }
    }
}

impl Config {
    /// Load a config file
    ///
    /// A relative `stats.log_file` is resolved against the directory holding
    /// the config file, not the working directory.
    ///
    /// # Errors
    /// * `ConfigError::Io` - If file cannot be read
    /// * `ConfigError::Parse` - If TOML is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let contents = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;

        if config.stats.log_file.is_relative() {
            if let Some(dir) = path.parent() {
                config.stats.log_file = dir.join(&config.stats.log_file);
            }
        }

        Ok(config)
    }

    /// Load the explicit config file, else `benchkit.toml` from the working
    /// directory, else built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Self::load(fallback);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.stats.log_file, PathBuf::from("chord.txt"));
        assert_eq!(config.stats.pairing, PairingPolicy::Truncate);
        assert!(!config.stats.skip_first_client);
        assert_eq!(config.patch.disabled_ids, vec!["expressionInput", "cola"]);
        assert_eq!(config.patch.prefix_rules.len(), 2);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("benchkit.toml");
        fs::write(
            &path,
            "[stats]\nlog_file = \"logs/run.txt\"\npairing = \"pad-zero\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.stats.log_file, dir.path().join("logs/run.txt"));
        assert_eq!(config.stats.pairing, PairingPolicy::PadZero);
        // Untouched section keeps its defaults
        assert_eq!(config.patch.disabled_ids.len(), 2);
    }

    #[test]
    fn test_load_patch_section() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[patch]
disabled_ids = ["run"]
prefix_rules = [{{ attribute = "href", from = "/img", to = "../img" }}]"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.patch.disabled_ids, vec!["run"]);
        assert_eq!(config.patch.prefix_rules[0].from, "/img");
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[stats\nlog_file = 3").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/definitely/not/here.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
