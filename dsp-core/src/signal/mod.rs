//! Test-signal generation

pub mod sampling;
pub mod waveforms;

pub use sampling::SamplingGrid;
