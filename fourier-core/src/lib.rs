//! Fourier Illustration Core
//!
//! Synthesizes a demonstration signal, computes its one-sided magnitude
//! spectrum, and renders a two-panel documentation image.

pub mod render;
pub mod signal;
pub mod spectrum;

pub use render::RenderConfig;
pub use signal::{SynthConfig, TimeSeries};
pub use spectrum::{Spectrum, SpectrumAnalyzer};
