//! Demonstration signal synthesis

pub mod noise;
pub mod synth;

pub use noise::NoiseSource;
pub use synth::{synthesize, SignalError, SynthConfig, TimeSeries};
