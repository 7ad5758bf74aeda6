//! Direct-summation DFT
//!
//! The O(N^2) textbook definition, kept deliberately unoptimized so the
//! summation stays readable next to its formula

use super::SpectrumError;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Compute the DFT of a complex sample sequence by direct summation
///
/// X[k] = sum_{n=0}^{N-1} x[n] * exp(-2*pi*i*k*n/N)
///
/// # Arguments
/// * `samples` - Time-domain samples x[n] for n = 0..N-1
///
/// # Returns
/// Frequency-domain coefficients X[k] for k = 0..N-1, same length as the
/// input. Fails with [`SpectrumError::EmptyInput`] when N = 0.
pub fn dft(samples: &[Complex64]) -> Result<Vec<Complex64>, SpectrumError> {
    if samples.is_empty() {
        return Err(SpectrumError::EmptyInput);
    }

    let n_samples = samples.len() as f64;
    let mut spectrum = vec![Complex64::new(0.0, 0.0); samples.len()];

    for (k, coefficient) in spectrum.iter_mut().enumerate() {
        for (n, sample) in samples.iter().enumerate() {
            let angle = -2.0 * PI * k as f64 * n as f64 / n_samples;
            *coefficient += sample * Complex64::from_polar(1.0, angle);
        }
    }

    Ok(spectrum)
}

/// DFT of a real-valued sample sequence
///
/// Promotes the samples to complex with zero imaginary part and runs the
/// direct transform.
pub fn dft_real(samples: &[f64]) -> Result<Vec<Complex64>, SpectrumError> {
    let promoted: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    dft(&promoted)
}

/// Magnitude spectrum |X[k]|
pub fn magnitude(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

/// Phase spectrum arg X[k] in radians
pub fn phase(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.arg()).collect()
}

/// Frequency value of every DFT bin in Hz, wrapped layout
///
/// Bin k maps to k*fs/N for k < (N+1)/2 and to (k - N)*fs/N above, so the
/// upper half of the axis carries the negative frequencies. This is the
/// standard DFT bin convention; downstream peak and phase reporting relies
/// on it.
///
/// # Arguments
/// * `count` - Transform length N
/// * `sample_rate` - Sampling rate fs in Hz
pub fn bin_frequencies(count: usize, sample_rate: f64) -> Vec<f64> {
    let resolution = sample_rate / count as f64;

    (0..count)
        .map(|k| {
            if k < (count + 1) / 2 {
                k as f64 * resolution
            } else {
                (k as f64 - count as f64) * resolution
            }
        })
        .collect()
}

/// Bin spacing fs/N in Hz
pub fn frequency_resolution(sample_rate: f64, count: usize) -> f64 {
    sample_rate / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "{} vs {}", a, b);
    }

    #[test]
    fn test_dft_empty_input() {
        assert_eq!(dft(&[]), Err(SpectrumError::EmptyInput));
        assert_eq!(dft_real(&[]), Err(SpectrumError::EmptyInput));
    }

    #[test]
    fn test_dft_all_zeros() {
        let spectrum = dft_real(&[0.0; 16]).unwrap();

        assert_eq!(spectrum.len(), 16);
        for coefficient in spectrum {
            assert_eq!(coefficient, Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_dft_unit_impulse() {
        // x = [1, 0, 0, 0] transforms to all-ones
        let spectrum = dft_real(&[1.0, 0.0, 0.0, 0.0]).unwrap();

        assert_eq!(spectrum.len(), 4);
        for coefficient in spectrum {
            assert_close(coefficient.re, 1.0, 1e-12);
            assert_close(coefficient.im, 0.0, 1e-12);
        }
    }

    #[test]
    fn test_dft_single_sample() {
        let spectrum = dft_real(&[3.5]).unwrap();

        assert_eq!(spectrum.len(), 1);
        assert_close(spectrum[0].re, 3.5, 1e-12);
    }

    #[test]
    fn test_dft_pure_sinusoid_two_bins() {
        // 4 Hz tone at fs = 32 over N = 32: bins 4 and 28 carry N/2 each
        let n = 32;
        let samples: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 4.0 * i as f64 / 32.0).sin())
            .collect();

        let spectrum = dft_real(&samples).unwrap();
        let mags = magnitude(&spectrum);

        assert_close(mags[4], 16.0, 1e-9);
        assert_close(mags[28], 16.0, 1e-9);

        for (k, &mag) in mags.iter().enumerate() {
            if k != 4 && k != 28 {
                assert!(mag < 1e-9, "bin {} leaked: {}", k, mag);
            }
        }
    }

    #[test]
    fn test_dft_parseval() {
        // sum |X[k]|^2 = N * sum |x[n]|^2
        let samples: Vec<f64> = (0..64)
            .map(|i| {
                let t = i as f64 / 64.0;
                (2.0 * PI * 5.0 * t).sin() + 0.3 * (2.0 * PI * 11.0 * t).cos()
            })
            .collect();

        let spectrum = dft_real(&samples).unwrap();

        let time_energy: f64 = samples.iter().map(|x| x * x).sum();
        let freq_energy: f64 = spectrum.iter().map(|c| c.norm_sqr()).sum();

        assert_close(freq_energy, 64.0 * time_energy, 1e-6);
    }

    #[test]
    fn test_dft_linearity() {
        let x: Vec<Complex64> = (0..20).map(|i| Complex64::new(i as f64, 0.0)).collect();
        let y: Vec<Complex64> = (0..20)
            .map(|i| Complex64::new((i as f64 * 0.7).cos(), (i as f64 * 0.3).sin()))
            .collect();

        let a = Complex64::new(2.0, 0.0);
        let b = Complex64::new(0.0, -1.5);

        let combined: Vec<Complex64> = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| a * xi + b * yi)
            .collect();

        let dft_combined = dft(&combined).unwrap();
        let dft_x = dft(&x).unwrap();
        let dft_y = dft(&y).unwrap();

        for k in 0..20 {
            let expected = a * dft_x[k] + b * dft_y[k];
            assert!((dft_combined[k] - expected).norm() < 1e-9);
        }
    }

    #[test]
    fn test_dft_matches_fft_oracle() {
        use rustfft::FftPlanner;

        let samples: Vec<Complex64> = (0..100)
            .map(|i| {
                let t = i as f64 * 0.01;
                Complex64::new(
                    (2.0 * PI * 7.0 * t).sin() + 0.4 * (2.0 * PI * 23.0 * t).cos(),
                    0.2 * (2.0 * PI * 13.0 * t).sin(),
                )
            })
            .collect();

        let direct = dft(&samples).unwrap();

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(samples.len());
        let mut fast = samples.clone();
        fft.process(&mut fast);

        let scale: f64 = fast.iter().map(|c| c.norm()).sum::<f64>().max(1.0);
        for k in 0..samples.len() {
            assert!(
                (direct[k] - fast[k]).norm() / scale < 1e-9,
                "bin {} disagrees: {} vs {}",
                k,
                direct[k],
                fast[k]
            );
        }
    }

    #[test]
    fn test_phase_of_impulse_is_zero() {
        let spectrum = dft_real(&[1.0, 0.0, 0.0, 0.0]).unwrap();

        for p in phase(&spectrum) {
            assert_close(p, 0.0, 1e-9);
        }
    }

    #[test]
    fn test_bin_frequencies_even_length() {
        let freqs = bin_frequencies(4, 4.0);
        assert_eq!(freqs, vec![0.0, 1.0, -2.0, -1.0]);
    }

    #[test]
    fn test_bin_frequencies_odd_length() {
        let freqs = bin_frequencies(5, 5.0);
        assert_eq!(freqs, vec![0.0, 1.0, 2.0, -2.0, -1.0]);
    }

    #[test]
    fn test_frequency_resolution() {
        assert_close(frequency_resolution(50.0, 200), 0.25, 1e-12);
        assert_close(frequency_resolution(256.0, 1536), 1.0 / 6.0, 1e-12);
    }
}
