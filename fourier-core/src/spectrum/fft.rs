//! FFT engine using realfft for real-valued signals

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectrumError {
    #[error("Signal must contain at least one sample")]
    EmptySignal,

    #[error("Sample rate must be positive (got {0} Hz)")]
    InvalidSampleRate(f64),

    #[error("FFT processing failed: {0}")]
    Fft(String),
}

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real-to-complex FFT plan
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex spectrum)
    output_buffer: Vec<Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, any length >= 1)
    pub fn new(fft_size: usize) -> Result<Self, SpectrumError> {
        if fft_size == 0 {
            return Err(SpectrumError::EmptySignal);
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Ok(Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        })
    }

    /// Compute the normalized one-sided magnitude spectrum
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded if shorter than fft_size)
    ///
    /// # Returns
    /// |X[k]| / N for k = 0..floor(N/2), where N is the FFT size
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Result<Vec<f64>, SpectrumError> {
        // Copy signal to input buffer with zero-padding
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        if copy_len < self.fft_size {
            self.input_buffer[copy_len..].fill(0.0);
        }

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .map_err(|e| SpectrumError::Fft(e.to_string()))?;

        let n = self.fft_size as f64;
        Ok(self.output_buffer.iter().map(|c| c.norm() / n).collect())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins: floor(N/2) + 1 for a real FFT
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Convert bin index to frequency in Hz: k * sample_rate / N
    pub fn bin_to_hz(&self, bin: usize, sample_rate: f64) -> f64 {
        bin as f64 * sample_rate / self.fft_size as f64
    }

    /// Get frequency axis in Hz for the one-sided spectrum
    pub fn frequency_axis_hz(&self, sample_rate: f64) -> Vec<f64> {
        (0..self.num_bins())
            .map(|bin| self.bin_to_hz(bin, sample_rate))
            .collect()
    }
}
