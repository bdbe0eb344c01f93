//! Spectral analysis with a one-sided real FFT

pub mod analysis;
pub mod fft;

pub use analysis::{analyze, Spectrum, SpectrumAnalyzer};
pub use fft::{FftEngine, SpectrumError};
