//! Course exercise runner
//!
//! Reproduces the console narration of the spectral-analysis exercises on
//! top of the pure numeric core. No plotting: spectra are reported as peak
//! tables.

use clap::{Parser, Subcommand};
use log::debug;

use dft_lab::signal::{waveforms, SamplingGrid};
use dft_lab::spectrum::{PeakConfig, SpectrumAnalyzer, SpectrumError};

#[derive(Parser)]
#[command(name = "dft-lab", about = "Direct-DFT spectral analysis exercises")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Spectrum of an amplitude-modulated tone
    Am {
        /// Sampling rate in Hz
        #[arg(long, default_value_t = 50.0)]
        sample_rate: f64,

        /// Signal duration in seconds
        #[arg(long, default_value_t = 4.0)]
        duration: f64,

        /// Carrier frequency fc in Hz
        #[arg(long, default_value_t = 8.0)]
        carrier: f64,

        /// Modulator frequency fm in Hz
        #[arg(long, default_value_t = 0.5)]
        modulator: f64,

        /// Modulation depth m
        #[arg(long, default_value_t = 0.5)]
        depth: f64,

        /// Peak threshold as a fraction of the spectrum maximum
        #[arg(long, default_value_t = 0.1)]
        threshold: f64,
    },

    /// Two-tone signal with and without a sinusoidal interferer
    Tones {
        /// Sampling rate in Hz
        #[arg(long, default_value_t = 256.0)]
        sample_rate: f64,

        /// Signal duration in seconds
        #[arg(long, default_value_t = 6.0)]
        duration: f64,

        /// First tone frequency in Hz
        #[arg(long, default_value_t = 8.0)]
        f1: f64,

        /// Second tone frequency in Hz (at half level)
        #[arg(long, default_value_t = 20.0)]
        f2: f64,

        /// Interferer frequency in Hz
        #[arg(long, default_value_t = 50.0)]
        interferer: f64,

        /// Interferer amplitude
        #[arg(long, default_value_t = 0.3)]
        interferer_amp: f64,

        /// Peak threshold as a fraction of the spectrum maximum
        #[arg(long, default_value_t = 0.1)]
        threshold: f64,
    },

    /// Sampled test waveforms over [-1, 5] s
    Waveforms {
        /// Sampling period Ts in seconds
        #[arg(long, default_value_t = 0.05)]
        step: f64,
    },
}

fn main() -> Result<(), SpectrumError> {
    env_logger::init();

    match Cli::parse().command {
        Command::Am {
            sample_rate,
            duration,
            carrier,
            modulator,
            depth,
            threshold,
        } => run_am(sample_rate, duration, carrier, modulator, depth, threshold),
        Command::Tones {
            sample_rate,
            duration,
            f1,
            f2,
            interferer,
            interferer_amp,
            threshold,
        } => run_tones(
            sample_rate,
            duration,
            f1,
            f2,
            interferer,
            interferer_amp,
            threshold,
        ),
        Command::Waveforms { step } => {
            run_waveforms(step);
            Ok(())
        }
    }
}

fn run_am(
    sample_rate: f64,
    duration: f64,
    carrier: f64,
    modulator: f64,
    depth: f64,
    threshold: f64,
) -> Result<(), SpectrumError> {
    println!("=== Discrete Fourier Transform analysis ===");
    println!("Signal: x(t) = [1 + m*cos(2*pi*fm*t)] * sin(2*pi*fc*t)");
    println!(
        "Parameters: fm = {} Hz, fc = {} Hz, m = {}",
        modulator, carrier, depth
    );

    let grid = SamplingGrid::from_rate(sample_rate, duration);
    let samples = grid.sample(|t| waveforms::amplitude_modulated(carrier, modulator, depth, t));

    println!();
    println!("Sampling parameters:");
    println!("  sample rate:          {} Hz", sample_rate);
    println!("  samples:              {}", grid.count);
    println!(
        "  frequency resolution: {:.3} Hz",
        grid.frequency_resolution()
    );

    debug!("computing direct DFT of {} samples", samples.len());
    let analyzer = SpectrumAnalyzer::new(grid.sample_rate());
    let spectrum = analyzer.analyze(&samples)?;

    let config = PeakConfig {
        threshold,
        margin: 1,
    };
    let peaks = spectrum.positive_half().peaks(config);

    println!();
    println!("Spectral peaks (positive frequencies):");
    for (i, peak) in peaks.iter().enumerate() {
        println!(
            "  peak {}: frequency = {:.3} Hz, amplitude = {:.2}",
            i + 1,
            peak.frequency,
            peak.amplitude
        );
    }

    println!();
    println!("Expected components:");
    println!("  DC:             0 Hz");
    println!("  lower sideband: {:.1} Hz", carrier - modulator);
    println!("  carrier:        {:.1} Hz", carrier);
    println!("  upper sideband: {:.1} Hz", carrier + modulator);

    Ok(())
}

fn run_tones(
    sample_rate: f64,
    duration: f64,
    f1: f64,
    f2: f64,
    interferer: f64,
    interferer_amp: f64,
    threshold: f64,
) -> Result<(), SpectrumError> {
    println!("=== Two-tone analysis with interference ===");

    let grid = SamplingGrid::from_rate(sample_rate, duration);

    println!("Signal parameters:");
    println!("  sample rate:          {} Hz", sample_rate);
    println!("  duration:             {} s", duration);
    println!("  samples:              {}", grid.count);
    println!(
        "  frequency resolution: {:.4} Hz",
        grid.frequency_resolution()
    );
    println!("  tones:                f1 = {} Hz, f2 = {} Hz", f1, f2);
    println!(
        "  interferer:           {} Hz at amplitude {}",
        interferer, interferer_amp
    );

    let clean = grid.sample(|t| waveforms::two_tone(f1, f2, t));
    let noisy = grid.sample(waveforms::with_interference(
        |t| waveforms::two_tone(f1, f2, t),
        interferer,
        interferer_amp,
    ));

    debug!("computing direct DFTs of {} samples", grid.count);
    let analyzer = SpectrumAnalyzer::new(grid.sample_rate());
    let config = PeakConfig {
        threshold,
        margin: 2,
    };

    let clean_peaks = analyzer.analyze(&clean)?.positive_half().peaks(config);
    println!();
    println!("Peaks in clean signal (positive frequencies):");
    for (i, peak) in clean_peaks.iter().enumerate() {
        println!(
            "  peak {}: {:.3} Hz, amplitude {:.1}",
            i + 1,
            peak.frequency,
            peak.amplitude
        );
    }

    let noisy_peaks = analyzer.analyze(&noisy)?.positive_half().peaks(config);
    println!();
    println!("Peaks in signal with interference (positive frequencies):");
    for (i, peak) in noisy_peaks.iter().enumerate() {
        println!(
            "  peak {}: {:.3} Hz, amplitude {:.1}",
            i + 1,
            peak.frequency,
            peak.amplitude
        );
    }

    println!();
    println!("Observations:");
    println!("  clean signal peaks at {} Hz and {} Hz", f1, f2);
    println!("  the interferer adds a peak at {} Hz", interferer);
    println!(
        "  minimum distinguishable spacing: {:.4} Hz",
        grid.frequency_resolution()
    );

    Ok(())
}

fn run_waveforms(step: f64) {
    println!("=== Sampled test waveforms ===");

    let grid = SamplingGrid::from_span(-1.0, 5.0, step);
    println!(
        "Grid: [-1, 5] s at Ts = {} s ({} samples, fs = {} Hz)",
        step,
        grid.count,
        grid.sample_rate()
    );

    let named: [(&str, Box<dyn Fn(f64) -> f64>); 4] = [
        ("sine 2 Hz", Box::new(|t| waveforms::sinusoid(1.0, 2.0, t))),
        (
            "decaying exponential",
            Box::new(|t| waveforms::decaying_exponential(2.0, t)),
        ),
        (
            "triangular 2 Hz",
            Box::new(|t| waveforms::triangular(2.0, t)),
        ),
        ("square 2 Hz", Box::new(|t| waveforms::square(2.0, t))),
    ];

    for (name, signal) in named.iter() {
        let samples = grid.sample(signal);
        let preview: Vec<String> = samples
            .iter()
            .take(8)
            .map(|x| format!("{:+.3}", x))
            .collect();

        println!();
        println!("{}:", name);
        println!("  first samples: {}", preview.join(" "));
    }
}
