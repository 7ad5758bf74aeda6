//! Spectral peak detection
//!
//! Strict local maxima of a magnitude spectrum, gated by a fraction of the
//! global maximum

use super::SpectrumError;

/// One detected spectral peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Bin frequency in Hz
    pub frequency: f64,

    /// Magnitude at the bin
    pub amplitude: f64,
}

/// Peak detection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakConfig {
    /// Minimum peak height as a fraction of the global maximum, in (0, 1]
    pub threshold: f64,

    /// Number of boundary bins excluded at each end of the spectrum
    ///
    /// Margin 1 scans bins 1..N-2, margin 2 scans 2..N-3. Values below 1
    /// are treated as 1 since both immediate neighbors must exist.
    pub margin: usize,
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            margin: 1,
        }
    }
}

impl PeakConfig {
    /// Wider margin and higher threshold for interference-laden spectra
    pub fn noisy() -> Self {
        Self {
            threshold: 0.15,
            margin: 2,
        }
    }
}

/// Find strict local maxima exceeding threshold * max(magnitude)
///
/// # Arguments
/// * `magnitude` - Magnitude spectrum M, length N
/// * `frequencies` - Parallel frequency axis F, length N
/// * `config` - Threshold and boundary margin
///
/// # Returns
/// Peaks in ascending bin order. Bin i qualifies iff both immediate
/// neighbors are strictly smaller (plateaus never qualify) and
/// M[i] > threshold * max(M). Frequency and amplitude are drawn by
/// identical index from F and M; no interpolation is performed, so
/// resolution stays fs/N. Fails with [`SpectrumError::LengthMismatch`]
/// when M and F disagree in length. Spectra too short to hold an interior
/// bin yield no peaks.
pub fn find_peaks(
    magnitude: &[f64],
    frequencies: &[f64],
    config: PeakConfig,
) -> Result<Vec<Peak>, SpectrumError> {
    if magnitude.len() != frequencies.len() {
        return Err(SpectrumError::LengthMismatch {
            magnitude: magnitude.len(),
            frequencies: frequencies.len(),
        });
    }

    let n_bins = magnitude.len();
    let margin = config.margin.max(1);
    if n_bins < 2 * margin + 1 {
        return Ok(Vec::new());
    }

    let max_magnitude = magnitude.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let floor = config.threshold * max_magnitude;

    let mut peaks = Vec::new();
    for i in margin..n_bins - margin {
        if magnitude[i] > magnitude[i - 1]
            && magnitude[i] > magnitude[i + 1]
            && magnitude[i] > floor
        {
            peaks.push(Peak {
                frequency: frequencies[i],
                amplitude: magnitude[i],
            });
        }
    }

    Ok(peaks)
}
