//! Sample-rate-aware analysis surface
//!
//! Ties a sampling rate to the direct DFT so callers get frequency-labeled
//! magnitude and phase arrays in one step

use super::dft::{bin_frequencies, dft_real, magnitude, phase};
use super::peaks::{find_peaks, Peak, PeakConfig};
use super::SpectrumError;

/// Magnitude/phase spectrum with its frequency axis
///
/// The three arrays are parallel: index k holds the frequency, |X[k]| and
/// arg X[k] of the same bin, in the wrapped DFT layout (negative
/// frequencies in the upper half).
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Bin frequencies in Hz
    pub frequencies: Vec<f64>,

    /// |X[k]|
    pub magnitude: Vec<f64>,

    /// arg X[k] in radians
    pub phase: Vec<f64>,
}

impl Spectrum {
    /// Number of bins
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Restrict to the bins at non-negative frequencies
    ///
    /// The view the exercises report: DC up to (but not including) the
    /// wrapped negative half.
    pub fn positive_half(&self) -> Spectrum {
        let keep: Vec<usize> = (0..self.len())
            .filter(|&k| self.frequencies[k] >= 0.0)
            .collect();

        Spectrum {
            frequencies: keep.iter().map(|&k| self.frequencies[k]).collect(),
            magnitude: keep.iter().map(|&k| self.magnitude[k]).collect(),
            phase: keep.iter().map(|&k| self.phase[k]).collect(),
        }
    }

    /// Detect peaks in this spectrum's magnitude
    pub fn peaks(&self, config: PeakConfig) -> Vec<Peak> {
        find_peaks(&self.magnitude, &self.frequencies, config)
            .expect("spectrum arrays are parallel by construction")
    }
}

/// Spectrum analyzer bound to a sampling rate
#[derive(Debug, Clone, Copy)]
pub struct SpectrumAnalyzer {
    sample_rate: f64,
}

impl SpectrumAnalyzer {
    /// Create an analyzer for signals sampled at `sample_rate` Hz
    pub fn new(sample_rate: f64) -> Self {
        Self { sample_rate }
    }

    /// Analyze a real signal: direct DFT, magnitude, phase, frequency axis
    ///
    /// # Arguments
    /// * `samples` - Time-domain samples (N >= 1)
    ///
    /// # Returns
    /// The N-bin spectrum, or [`SpectrumError::EmptyInput`] for an empty
    /// sequence.
    pub fn analyze(&self, samples: &[f64]) -> Result<Spectrum, SpectrumError> {
        let coefficients = dft_real(samples)?;

        Ok(Spectrum {
            frequencies: bin_frequencies(samples.len(), self.sample_rate),
            magnitude: magnitude(&coefficients),
            phase: phase(&coefficients),
        })
    }

    /// Sampling rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Bin spacing fs/N in Hz for an N-sample transform
    pub fn frequency_resolution(&self, count: usize) -> f64 {
        self.sample_rate / count as f64
    }
}
