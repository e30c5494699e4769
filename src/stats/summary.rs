//! Summary statistics and client/server pairing.

use crate::utils::error::StatsError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Count, mean and sample standard deviation of one series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,

    /// Absent for an empty series
    pub average: Option<f64>,

    /// Bessel-corrected; absent below two samples
    pub std_dev: Option<f64>,
}

impl SummaryStats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let count = samples.len();
        if count == 0 {
            return Self {
                count,
                average: None,
                std_dev: None,
            };
        }

        let mean = samples.iter().sum::<f64>() / count as f64;

        let std_dev = if count > 1 {
            let squared: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
            Some((squared / (count - 1) as f64).sqrt())
        } else {
            None
        };

        Self {
            count,
            average: Some(mean),
            std_dev,
        }
    }
}

/// How client and server series of different lengths become totals
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PairingPolicy {
    /// Pair by index and drop the excess of the longer series
    #[default]
    Truncate,

    /// Refuse series of different lengths
    Strict,

    /// Pair by index and count a missing partner as 0 ms
    ///
    /// Pads whichever series is shorter, so extra server samples also
    /// produce totals. The benchmarking page padded only missing server
    /// values and kept the client length.
    PadZero,
}

/// Elementwise client + server, paired by index
///
/// # Errors
/// * `StatsError::LengthMismatch` - Lengths differ under `PairingPolicy::Strict`
pub fn pair_totals(
    client: &[f64],
    server: &[f64],
    policy: PairingPolicy,
) -> Result<Vec<f64>, StatsError> {
    let (short, long) = (client.len().min(server.len()), client.len().max(server.len()));

    if short != long {
        match policy {
            PairingPolicy::Truncate => warn!(
                "Client/server counts differ ({} vs {}); dropping {} unpaired sample(s)",
                client.len(),
                server.len(),
                long - short
            ),
            PairingPolicy::Strict => {
                return Err(StatsError::LengthMismatch {
                    client: client.len(),
                    server: server.len(),
                })
            }
            PairingPolicy::PadZero => debug!(
                "Padding {} unpaired sample(s) with 0 ms",
                long - short
            ),
        }
    }

    let totals = match policy {
        PairingPolicy::PadZero => (0..long)
            .map(|i| client.get(i).copied().unwrap_or(0.0) + server.get(i).copied().unwrap_or(0.0))
            .collect(),
        _ => client.iter().zip(server).map(|(c, s)| c + s).collect(),
    };

    Ok(totals)
}
