use benchkit::encoding::{EncodingDetector, FixedEncoding, SniffingDetector};
use benchkit::stats::{analyze_file, analyze_text, PairingPolicy, StatsOptions};
use benchkit::utils::error::{EncodingError, StatsError};
use encoding_rs::Encoding;
use std::fs;

const RUN_LOG: &str = "\
Server listening on port 3000
Server time: 41.2 ms
Client time: 120.5 ms
Server time: 38.8 ms
Client time: 99.5 ms
Server time: 40 ms
Client time: 110 ms
";

/// Detector that never finds anything
struct NoEncoding;

impl EncodingDetector for NoEncoding {
    fn detect(&self, _bytes: &[u8]) -> Option<&'static Encoding> {
        None
    }
}

#[test]
fn test_single_client_and_server_sample() {
    let report = analyze_text(
        "Client time: 12.5 ms\nServer time: 7.5 ms\n",
        "chord.txt",
        "UTF-8",
        StatsOptions::default(),
    )
    .unwrap();

    assert_eq!(report.client.stats.count, 1);
    assert_eq!(report.client.stats.average, Some(12.5));
    assert_eq!(report.client.stats.std_dev, None);
    assert_eq!(report.server.stats.average, Some(7.5));
    assert_eq!(report.total.stats.count, 1);
    assert_eq!(report.total.stats.average, Some(20.0));
    assert_eq!(report.total.stats.std_dev, None);
}

#[test]
fn test_total_count_is_shorter_series() {
    let text = "Client time: 1 ms\nClient time: 2 ms\nClient time: 3 ms\nServer time: 1 ms\n";
    let report = analyze_text(text, "log", "UTF-8", StatsOptions::default()).unwrap();

    assert_eq!(report.client.stats.count, 3);
    assert_eq!(report.server.stats.count, 1);
    assert_eq!(
        report.total.stats.count,
        report.client.stats.count.min(report.server.stats.count)
    );
    assert_eq!(report.total.samples, vec![2.0]);
}

#[test]
fn test_full_run_statistics() {
    let report = analyze_text(RUN_LOG, "run.txt", "UTF-8", StatsOptions::default()).unwrap();

    assert_eq!(report.client.samples, vec![120.5, 99.5, 110.0]);
    assert_eq!(report.server.samples, vec![41.2, 38.8, 40.0]);

    let client_avg = report.client.stats.average.unwrap();
    assert!((client_avg - 110.0).abs() < 1e-9);

    // Deviations 10.5, -10.5, 0 -> variance 220.5 / 2
    let client_sd = report.client.stats.std_dev.unwrap();
    assert!((client_sd - 110.25_f64.sqrt()).abs() < 1e-9);

    let total_avg = report.total.stats.average.unwrap();
    assert!((total_avg - 150.0).abs() < 1e-9);
}

#[test]
fn test_strict_and_pad_zero_pairing() {
    let text = "Client time: 5 ms\nClient time: 6 ms\nServer time: 1 ms\n";

    let strict = StatsOptions {
        pairing: PairingPolicy::Strict,
        ..Default::default()
    };
    assert!(matches!(
        analyze_text(text, "log", "UTF-8", strict),
        Err(StatsError::LengthMismatch {
            client: 2,
            server: 1
        })
    ));

    let padded = StatsOptions {
        pairing: PairingPolicy::PadZero,
        ..Default::default()
    };
    let report = analyze_text(text, "log", "UTF-8", padded).unwrap();
    assert_eq!(report.total.samples, vec![6.0, 6.0]);
}

#[test]
fn test_analyze_utf8_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chord.txt");
    fs::write(&path, RUN_LOG).unwrap();

    let report = analyze_file(&path, &SniffingDetector, StatsOptions::default()).unwrap();

    assert_eq!(report.total.stats.count, 3);
    assert_eq!(report.source, path.display().to_string());
}

#[test]
fn test_analyze_utf16_file_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chord.txt");

    let mut bytes = vec![0xFF, 0xFE];
    for unit in "Client time: 12.5 ms\r\nServer time: 7.5 ms\r\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let report = analyze_file(&path, &SniffingDetector, StatsOptions::default()).unwrap();

    assert_eq!(report.encoding, "UTF-16LE");
    assert_eq!(report.total.stats.average, Some(20.0));
}

#[test]
fn test_analyze_latin1_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chord.txt");

    // "Durée" in windows-1252 followed by timings
    let mut bytes = b"Dur\xE9e du rendu\n".to_vec();
    bytes.extend_from_slice(b"Client time: 3 ms\nServer time: 4 ms\n");
    fs::write(&path, bytes).unwrap();

    let report = analyze_file(&path, &SniffingDetector, StatsOptions::default()).unwrap();

    assert_ne!(report.encoding, "UTF-8");
    assert_eq!(report.total.samples, vec![7.0]);
}

#[test]
fn test_forced_encoding_rejects_malformed_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chord.txt");
    fs::write(&path, b"Client time: 3 ms \xFF\n").unwrap();

    let utf8 = FixedEncoding::from_label("utf-8").unwrap();
    let result = analyze_file(&path, &utf8, StatsOptions::default());

    assert!(matches!(
        result,
        Err(StatsError::Encoding(EncodingError::Decode { .. }))
    ));
}

#[test]
fn test_undetectable_encoding_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chord.txt");
    fs::write(&path, RUN_LOG).unwrap();

    let result = analyze_file(&path, &NoEncoding, StatsOptions::default());

    assert!(matches!(
        result,
        Err(StatsError::Encoding(EncodingError::Detection(_)))
    ));
}

#[test]
fn test_missing_log_file() {
    let result = analyze_file(
        "/no/such/chord.txt",
        &SniffingDetector,
        StatsOptions::default(),
    );

    assert!(matches!(
        result,
        Err(StatsError::Encoding(EncodingError::Io(_)))
    ));
}
