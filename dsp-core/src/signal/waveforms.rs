//! Closed-form test waveforms
//!
//! Deterministic time-domain signals used by the spectral analysis
//! exercises. Each is a pure function of t, suitable for sampling over a
//! [`SamplingGrid`](super::SamplingGrid).

use std::f64::consts::PI;

/// A * sin(2*pi*f*t)
#[inline]
pub fn sinusoid(amplitude: f64, frequency_hz: f64, t: f64) -> f64 {
    amplitude * (2.0 * PI * frequency_hz * t).sin()
}

/// Decaying exponential gated by the unit step: e^(-rate*t) * u(t)
///
/// u(0) = 1, so the sample at t = 0 is exactly 1.
#[inline]
pub fn decaying_exponential(rate: f64, t: f64) -> f64 {
    if t >= 0.0 {
        (-rate * t).exp()
    } else {
        0.0
    }
}

/// Symmetric triangle wave with period 1/f, range [-1, 1]
///
/// Rises -1 to 1 over the first half-period, falls back over the second,
/// with value -1 at t = 0.
pub fn triangular(frequency_hz: f64, t: f64) -> f64 {
    let phase = (frequency_hz * t).rem_euclid(1.0);

    if phase < 0.5 {
        -1.0 + 4.0 * phase
    } else {
        3.0 - 4.0 * phase
    }
}

/// Square wave with period 1/f, values +1 and -1
///
/// +1 on the first half-period (including t = 0), -1 on the second.
pub fn square(frequency_hz: f64, t: f64) -> f64 {
    if (frequency_hz * t).rem_euclid(1.0) < 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// Amplitude-modulated tone: [1 + depth*cos(2*pi*fm*t)] * sin(2*pi*fc*t)
///
/// # Arguments
/// * `carrier_hz` - Carrier frequency fc
/// * `modulator_hz` - Modulator frequency fm
/// * `depth` - Modulation index m
///
/// The spectrum carries the carrier plus sidebands at fc - fm and fc + fm
/// with relative level depth/2.
pub fn amplitude_modulated(carrier_hz: f64, modulator_hz: f64, depth: f64, t: f64) -> f64 {
    let envelope = 1.0 + depth * (2.0 * PI * modulator_hz * t).cos();
    envelope * (2.0 * PI * carrier_hz * t).sin()
}

/// Two-tone test signal: sin(2*pi*f1*t) + 0.5*sin(2*pi*f2*t)
///
/// The second tone sits at half the level of the first.
pub fn two_tone(f1_hz: f64, f2_hz: f64, t: f64) -> f64 {
    (2.0 * PI * f1_hz * t).sin() + 0.5 * (2.0 * PI * f2_hz * t).sin()
}

/// Add a sinusoidal interferer to another signal
///
/// # Arguments
/// * `signal` - Base signal x(t)
/// * `interferer_hz` - Interferer frequency
/// * `interferer_amp` - Interferer amplitude
///
/// # Returns
/// x(t) + amp*sin(2*pi*fi*t) as a new time-domain function
pub fn with_interference<F>(signal: F, interferer_hz: f64, interferer_amp: f64) -> impl Fn(f64) -> f64
where
    F: Fn(f64) -> f64,
{
    move |t| signal(t) + interferer_amp * (2.0 * PI * interferer_hz * t).sin()
}
