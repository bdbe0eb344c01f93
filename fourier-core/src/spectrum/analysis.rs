//! High-level spectrum analyzer
//!
//! Wraps the FFT engine and pairs each magnitude with its frequency bin.

use super::fft::{FftEngine, SpectrumError};

/// One-sided magnitude spectrum
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Frequency bins in Hz, ascending from 0 in steps of sample_rate / N
    pub frequencies: Vec<f64>,

    /// Normalized magnitudes |X[k]| / N, one per bin
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    /// Number of frequency bins
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Whether the spectrum holds no bins
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Index of the bin with the largest magnitude
    pub fn peak_bin(&self) -> Option<usize> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(bin, _)| bin)
    }
}

/// Spectrum analyzer for a fixed FFT size and sample rate
pub struct SpectrumAnalyzer {
    sample_rate: f64,
    fft_engine: FftEngine,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples)
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(fft_size: usize, sample_rate: f64) -> Result<Self, SpectrumError> {
        if sample_rate <= 0.0 {
            return Err(SpectrumError::InvalidSampleRate(sample_rate));
        }

        Ok(Self {
            sample_rate,
            fft_engine: FftEngine::new(fft_size)?,
        })
    }

    /// Analyze signal and return its one-sided magnitude spectrum
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded if shorter than the FFT size)
    pub fn analyze(&mut self, signal: &[f64]) -> Result<Spectrum, SpectrumError> {
        let magnitudes = self.fft_engine.compute_magnitude(signal)?;
        let frequencies = self.fft_engine.frequency_axis_hz(self.sample_rate);

        Ok(Spectrum {
            frequencies,
            magnitudes,
        })
    }

    /// Get number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.fft_engine.num_bins()
    }

    /// Get sample rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

/// One-shot analysis with the FFT size equal to the signal length
///
/// # Arguments
/// * `signal` - Input signal, at least one sample
/// * `sample_rate` - Sample rate in Hz
pub fn analyze(signal: &[f64], sample_rate: f64) -> Result<Spectrum, SpectrumError> {
    SpectrumAnalyzer::new(signal.len(), sample_rate)?.analyze(signal)
}
