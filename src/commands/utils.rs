use crate::utils::config::SCHEMA_VERSION;

/// Display version information
pub fn display_version() {
    println!("benchkit v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Timing-log statistics and HTML asset-path patching for diagram benchmarks.");
}
