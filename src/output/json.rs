//! JSON report output.
//!
//! Serializes TimingReport structs with proper formatting.

use crate::stats::TimingReport;
use crate::utils::error::StatsError;
use log::debug;
use std::fs::File;
use std::path::Path;

/// Serialize a report as pretty-printed JSON
pub fn report_to_string(report: &TimingReport) -> Result<String, StatsError> {
    let json = serde_json::to_string_pretty(report)?;
    debug!("Serialized report ({} bytes)", json.len());
    Ok(json)
}

/// Read a report back from a JSON file
///
/// **Public** - useful for comparing runs and for testing
pub fn read_report(input_path: impl AsRef<Path>) -> Result<TimingReport, StatsError> {
    let input_path = input_path.as_ref();
    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: TimingReport = serde_json::from_reader(file)?;

    debug!(
        "Report loaded: version {}, source {}",
        report.version, report.source
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{analyze_text, PairingPolicy, StatsOptions};
    use tempfile::NamedTempFile;

    fn create_test_report() -> TimingReport {
        analyze_text(
            "Client time: 10 ms\nServer time: 5 ms\nClient time: 14 ms\nServer time: 7 ms",
            "chord.txt",
            "UTF-8",
            StatsOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_report_json_shape() {
        let json = report_to_string(&create_test_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["pairing"], "truncate");
        assert_eq!(value["total"]["stats"]["count"], 2);
        assert_eq!(value["total"]["stats"]["average"], 18.0);
    }

    #[test]
    fn test_absent_stats_serialize_as_null() {
        let report = analyze_text("", "x", "UTF-8", StatsOptions::default()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&report_to_string(&report).unwrap()).unwrap();

        assert!(value["client"]["stats"]["average"].is_null());
        assert!(value["client"]["stats"]["std_dev"].is_null());
    }

    #[test]
    fn test_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), report_to_string(&report).unwrap()).unwrap();

        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded.total.samples, report.total.samples);
        assert_eq!(loaded.total.stats.count, 2);
        assert_eq!(loaded.pairing, PairingPolicy::Truncate);
    }
}
