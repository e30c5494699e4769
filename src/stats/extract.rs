//! Extract timing samples from decoded log text.
//!
//! Lines look like `Client time: 12.5 ms` or `Server time: 7.5 ms`.
//! Every match is taken, in document order.

use crate::utils::config::{CLIENT_MARKER, SERVER_MARKER};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static CLIENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| timing_pattern(CLIENT_MARKER));
static SERVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| timing_pattern(SERVER_MARKER));

/// Which side of the round trip a sample was measured on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingSource {
    Client,
    Server,
}

impl TimingSource {
    /// Label used in reports ("Client", "Server")
    pub fn label(self) -> &'static str {
        match self {
            TimingSource::Client => "Client",
            TimingSource::Server => "Server",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            TimingSource::Client => &*CLIENT_PATTERN,
            TimingSource::Server => &*SERVER_PATTERN,
        }
    }
}

/// Build `<marker>: <number> ms` where the number is ASCII digits with at
/// most one decimal point
fn timing_pattern(marker: &str) -> Regex {
    Regex::new(&format!(
        r"{}: ([0-9]+(?:\.[0-9]*)?|\.[0-9]+) ms",
        regex::escape(marker)
    ))
    .expect("timing pattern is a valid regex")
}

/// Collect all samples for `source`, in milliseconds, left to right
///
/// **Public** - main entry point for extraction
pub fn extract_times(text: &str, source: TimingSource) -> Vec<f64> {
    let times: Vec<f64> = source
        .pattern()
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .collect();

    debug!("Extracted {} {} samples", times.len(), source.label());
    times
}
