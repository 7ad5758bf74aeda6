//! dft-lab - Instructional DSP Core
//!
//! Test-waveform generation and direct-summation spectral analysis.

pub mod signal;
pub mod spectrum;

pub use signal::SamplingGrid;
pub use spectrum::{Peak, PeakConfig, Spectrum, SpectrumAnalyzer, SpectrumError};
