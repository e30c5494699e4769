//! Build a [`TimingReport`] from a log file or already-decoded text.

use super::extract::{extract_times, TimingSource};
use super::schema::{TimingReport, TimingSeries};
use super::summary::{pair_totals, PairingPolicy};
use crate::encoding::{read_text, EncodingDetector};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::StatsError;
use log::{debug, info};
use std::path::Path;

/// Knobs for turning samples into a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsOptions {
    pub pairing: PairingPolicy,

    /// Drop the first client sample (warm-up page load)
    pub skip_first_client: bool,
}

/// Analyze decoded log text
///
/// `source` and `encoding` are only recorded in the report.
pub fn analyze_text(
    text: &str,
    source: &str,
    encoding: &str,
    options: StatsOptions,
) -> Result<TimingReport, StatsError> {
    let mut client_times = extract_times(text, TimingSource::Client);
    let server_times = extract_times(text, TimingSource::Server);

    if options.skip_first_client && !client_times.is_empty() {
        debug!("Discarding first client sample: {} ms", client_times[0]);
        client_times.remove(0);
    }

    let total_times = pair_totals(&client_times, &server_times, options.pairing)?;

    Ok(TimingReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        encoding: encoding.to_string(),
        pairing: options.pairing,
        skip_first_client: options.skip_first_client,
        client: TimingSeries::new(TimingSource::Client.label(), client_times),
        server: TimingSeries::new(TimingSource::Server.label(), server_times),
        total: TimingSeries::new("Total", total_times),
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Read, decode and analyze a log file
///
/// **Public** - main entry point for the stats command
///
/// # Errors
/// * `StatsError::Encoding` - File unreadable, encoding undetectable, or bytes malformed
/// * `StatsError::LengthMismatch` - Unequal counts under `PairingPolicy::Strict`
pub fn analyze_file(
    path: impl AsRef<Path>,
    detector: &dyn EncodingDetector,
    options: StatsOptions,
) -> Result<TimingReport, StatsError> {
    let path = path.as_ref();
    info!("Reading timing log: {}", path.display());

    let (text, encoding) = read_text(path, detector)?;
    debug!("Decoded {} as {}", path.display(), encoding.name());

    analyze_text(&text, &path.display().to_string(), encoding.name(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_single_pair() {
        let report = analyze_text(
            "Client time: 12.5 ms\nServer time: 7.5 ms\n",
            "chord.txt",
            "UTF-8",
            StatsOptions::default(),
        )
        .unwrap();

        assert_eq!(report.client.stats.average, Some(12.5));
        assert_eq!(report.server.stats.average, Some(7.5));
        assert_eq!(report.total.stats.average, Some(20.0));
        assert_eq!(report.total.stats.count, 1);
        assert!(report.total.stats.std_dev.is_none());
    }

    #[test]
    fn test_analyze_skip_first_client() {
        let text = "Client time: 900 ms\nClient time: 10 ms\nServer time: 5 ms\n";
        let options = StatsOptions {
            skip_first_client: true,
            ..Default::default()
        };

        let report = analyze_text(text, "log", "UTF-8", options).unwrap();

        assert_eq!(report.client.samples, vec![10.0]);
        assert_eq!(report.total.samples, vec![15.0]);
        assert!(report.skip_first_client);
    }

    #[test]
    fn test_analyze_skip_first_on_empty() {
        let options = StatsOptions {
            skip_first_client: true,
            ..Default::default()
        };
        let report = analyze_text("nothing here", "log", "UTF-8", options).unwrap();
        assert_eq!(report.client.stats.count, 0);
    }

    #[test]
    fn test_analyze_strict_propagates() {
        let options = StatsOptions {
            pairing: PairingPolicy::Strict,
            ..Default::default()
        };
        let result = analyze_text("Client time: 1 ms", "log", "UTF-8", options);
        assert!(matches!(result, Err(StatsError::LengthMismatch { .. })));
    }

    #[test]
    fn test_series_order() {
        let report = analyze_text("", "log", "UTF-8", StatsOptions::default()).unwrap();
        let labels: Vec<&str> = report.series().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Client", "Server", "Total"]);
    }
}
