//! Character-encoding detection and decoding for log files.
//!
//! Detection is pluggable through [`EncodingDetector`]; the default
//! [`SniffingDetector`] honors a byte-order mark and otherwise asks
//! `chardetng` for its best guess. Decoding never substitutes replacement
//! characters: malformed input is an error.

use crate::utils::error::EncodingError;
use encoding_rs::{Encoding, UTF_8};
use log::debug;
use std::fs;
use std::path::Path;

/// Anything that can guess the encoding of a byte buffer
pub trait EncodingDetector {
    /// Returns `None` when no encoding can be inferred
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding>;
}

/// BOM check followed by statistical sniffing
#[derive(Debug, Clone, Copy, Default)]
pub struct SniffingDetector;

impl EncodingDetector for SniffingDetector {
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding> {
        if bytes.is_empty() {
            return Some(UTF_8);
        }

        if let Some((encoding, _)) = Encoding::for_bom(bytes) {
            debug!("BOM found: {}", encoding.name());
            return Some(encoding);
        }

        // Without a BOM, NUL bytes mean binary or BOM-less UTF-16, which
        // sniffing cannot tell apart
        if bytes.contains(&0) {
            return None;
        }

        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(bytes, true);
        let guess = detector.guess(None, true);
        debug!("Sniffed encoding: {}", guess.name());
        Some(guess)
    }
}

/// Always reports the same encoding
#[derive(Debug, Clone, Copy)]
pub struct FixedEncoding(pub &'static Encoding);

impl FixedEncoding {
    /// Resolve a WHATWG label such as `utf-8`, `latin1` or `utf-16le`
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(FixedEncoding)
            .ok_or_else(|| EncodingError::UnknownLabel(label.to_string()))
    }
}

impl EncodingDetector for FixedEncoding {
    fn detect(&self, _bytes: &[u8]) -> Option<&'static Encoding> {
        Some(self.0)
    }
}

/// Decode `bytes` as `encoding`, stripping a matching BOM
///
/// # Errors
/// * `EncodingError::Decode` - Malformed byte sequence for `encoding`
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Result<String, EncodingError> {
    let body = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len)) if bom_encoding == encoding => &bytes[bom_len..],
        _ => bytes,
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or(EncodingError::Decode {
            encoding: encoding.name(),
        })
}

/// Read a file and decode it with whatever `detector` picks
///
/// # Returns
/// The decoded text and the encoding that was used
pub fn read_text(
    path: impl AsRef<Path>,
    detector: &dyn EncodingDetector,
) -> Result<(String, &'static Encoding), EncodingError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let encoding = detector
        .detect(&bytes)
        .ok_or_else(|| EncodingError::Detection(path.display().to_string()))?;

    let text = decode(&bytes, encoding)?;
    Ok((text, encoding))
}
