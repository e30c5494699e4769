//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while detecting or decoding a file's text encoding
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not detect a character encoding for {0}")]
    Detection(String),

    #[error("Invalid byte sequence for encoding {encoding}")]
    Decode { encoding: &'static str },

    #[error("Unknown encoding label: {0}")]
    UnknownLabel(String),
}

/// Errors that can occur while computing timing statistics
#[derive(Error, Debug)]
pub enum StatsError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("Failed to read report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Client/server sample counts differ ({client} client vs {server} server)")]
    LengthMismatch { client: usize, server: usize },

    #[error("Report JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur while patching an HTML file
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("File {} not found.", .0.display())]
    NotFound(PathBuf),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to replace {}: {}", .path.display(), .source)]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid patch rule: {0}")]
    InvalidRule(String),
}

/// Errors that can occur while loading the TOML configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
