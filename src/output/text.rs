//! Plain-text renderers for timing reports.

use crate::stats::{SummaryStats, TimingReport};
use colored::*;
use std::path::Path;

/// One line per series:
/// `Client Time Statistics: {'count': 1, 'average': 12.5, 'std_dev': None}`
pub fn render_summary(report: &TimingReport) -> String {
    report
        .series()
        .iter()
        .map(|series| format!("{} Time Statistics: {}", series.label, render_stats(&series.stats)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Key-value form of a single record
pub fn render_stats(stats: &SummaryStats) -> String {
    format!(
        "{{'count': {}, 'average': {}, 'std_dev': {}}}",
        stats.count,
        optional_float(stats.average),
        optional_float(stats.std_dev)
    )
}

fn optional_float(value: Option<f64>) -> String {
    value.map(format_float).unwrap_or_else(|| "None".to_string())
}

/// Shortest round-trip float text, always with a decimal point or exponent
///
/// Matches the familiar `repr` style: `20.0`, `0.1`, `1e+16`, `1.5e-05`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let text = value.to_string();
        return if text.contains('.') { text } else { format!("{text}.0") };
    }

    // `{:e}` gives `1.5e-5`; pad the exponent to two digits with an explicit sign
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Per-run table with average and std-dev header rows
pub fn render_table(report: &TimingReport) -> String {
    let stem = Path::new(&report.source)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.source.clone());

    let mut lines = Vec::new();
    lines.push(format!(
        "Ran {}, {} time(s).",
        stem.bold(),
        report.client.stats.count
    ));
    lines.push(String::new());

    let separator = format!(
        "+{}+{}+{}+{}+",
        "-".repeat(10),
        "-".repeat(26),
        "-".repeat(20),
        "-".repeat(14)
    );

    lines.push(separator.clone());
    lines.push(format!(
        "| {:<8} | {:>24} | {:>18} | {:>12} |",
        "Index", "Constraint Solving Time", "Graph Layout Time", "Total Time"
    ));
    lines.push(separator.clone());

    let (client, server, total) = (&report.client.stats, &report.server.stats, &report.total.stats);
    lines.push(table_row(
        "Average",
        server.average,
        client.average,
        total.average,
    ));
    lines.push(table_row(
        "Std Dev",
        server.std_dev,
        client.std_dev,
        total.std_dev,
    ));
    lines.push(separator.clone());

    for i in 0..report.total.samples.len() {
        lines.push(table_row(
            &(i + 1).to_string(),
            report.server.samples.get(i).copied(),
            report.client.samples.get(i).copied(),
            report.total.samples.get(i).copied(),
        ));
    }

    if !report.total.samples.is_empty() {
        lines.push(separator);
    }

    lines.join("\n")
}

fn table_row(index: &str, server: Option<f64>, client: Option<f64>, total: Option<f64>) -> String {
    format!(
        "| {:<8} | {:>24} | {:>18} | {:>12} |",
        index,
        fixed(server),
        fixed(client),
        fixed(total)
    )
}

fn fixed(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "-".to_string())
}
