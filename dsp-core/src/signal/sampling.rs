//! Uniform sampling grids
//!
//! Expresses "sample at rate fs over a span" as a small value object so the
//! boundary arithmetic lives in one place instead of being redone per caller

/// Uniformly spaced sampling instants t_n = start + n*step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingGrid {
    /// First instant t_0
    pub start: f64,

    /// Spacing between instants (sampling period Ts)
    pub step: f64,

    /// Number of instants N
    pub count: usize,
}

impl SamplingGrid {
    /// Grid starting at t = 0 covering `duration` seconds at `sample_rate` Hz
    ///
    /// # Arguments
    /// * `sample_rate` - Samples per second (must be > 0)
    /// * `duration` - Span in seconds
    ///
    /// # Returns
    /// Grid with N = floor(sample_rate * duration) instants
    pub fn from_rate(sample_rate: f64, duration: f64) -> Self {
        Self {
            start: 0.0,
            step: 1.0 / sample_rate,
            count: (sample_rate * duration) as usize,
        }
    }

    /// Grid covering [start, end] inclusive with spacing `step`
    ///
    /// # Returns
    /// Grid with N = floor((end - start) / step) + 1 instants; end < start
    /// degenerates to the single instant at `start`
    pub fn from_span(start: f64, end: f64, step: f64) -> Self {
        let count = if end < start {
            1
        } else {
            ((end - start) / step) as usize + 1
        };

        Self { start, step, count }
    }

    /// Sampling instant t_n
    #[inline]
    pub fn instant(&self, n: usize) -> f64 {
        self.start + n as f64 * self.step
    }

    /// All N sampling instants
    pub fn times(&self) -> Vec<f64> {
        (0..self.count).map(|n| self.instant(n)).collect()
    }

    /// Sampling rate fs = 1/Ts in Hz
    pub fn sample_rate(&self) -> f64 {
        1.0 / self.step
    }

    /// DFT bin spacing fs/N in Hz for a transform over this grid
    pub fn frequency_resolution(&self) -> f64 {
        self.sample_rate() / self.count as f64
    }

    /// Evaluate a time-domain function at every instant
    ///
    /// # Arguments
    /// * `signal` - Continuous-time signal x(t)
    ///
    /// # Returns
    /// Discrete sequence x[n] = x(t_n) for n = 0..N-1
    pub fn sample<F>(&self, signal: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        (0..self.count).map(|n| signal(self.instant(n))).collect()
    }
}
