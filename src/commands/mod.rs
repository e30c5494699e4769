//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod patch;
pub mod stats;
pub mod utils;

// Re-export main command functions
pub use models::{PatchArgs, PatchStatus, StatsArgs};
pub use patch::execute_patch;
pub use stats::{execute_stats, validate_stats_args};
pub use utils::display_version;
