//! benchkit
//!
//! Helpers for diagram benchmarking runs:
//! - `stats` turns `Client time: <n> ms` / `Server time: <n> ms` log lines
//!   into count, mean and sample standard deviation per series
//! - `patch` rewrites an exported HTML page so it loads assets from a
//!   sibling directory and has its interactive inputs disabled
//!
//! This crate provides the core implementation for the `benchkit` CLI.

pub mod commands;
pub mod encoding;
pub mod output;
pub mod patch;
pub mod stats;
pub mod utils;
