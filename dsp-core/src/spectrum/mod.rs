//! Direct-summation spectral analysis

pub mod analysis;
pub mod dft;
pub mod peaks;

pub use analysis::{Spectrum, SpectrumAnalyzer};
pub use dft::dft;
pub use peaks::{find_peaks, Peak, PeakConfig};

use thiserror::Error;

/// Errors raised by the spectral routines
///
/// Both variants are programmer-error conditions surfaced immediately to
/// the caller; no partial results are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpectrumError {
    #[error("cannot transform an empty sample sequence")]
    EmptyInput,

    #[error("magnitude and frequency sequences differ in length ({magnitude} vs {frequencies})")]
    LengthMismatch { magnitude: usize, frequencies: usize },
}
