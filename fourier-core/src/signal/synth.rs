//! Demonstration waveform synthesizer
//!
//! Builds the fixed test signal used throughout the illustration: two steady
//! sinusoids at 50 Hz and 120 Hz, a decaying 300 Hz transient, and additive
//! Gaussian noise.

use super::noise::NoiseSource;
use std::f64::consts::PI;
use thiserror::Error;

/// Primary component frequency in Hz
pub const PRIMARY_FREQ_HZ: f64 = 50.0;

/// Primary component amplitude
pub const PRIMARY_AMPLITUDE: f64 = 1.0;

/// Secondary component frequency in Hz
pub const SECONDARY_FREQ_HZ: f64 = 120.0;

/// Secondary component amplitude
pub const SECONDARY_AMPLITUDE: f64 = 0.6;

/// Transient component frequency in Hz
pub const TRANSIENT_FREQ_HZ: f64 = 300.0;

/// Transient component amplitude before decay
pub const TRANSIENT_AMPLITUDE: f64 = 0.3;

/// Decay rate of the transient envelope in 1/s
pub const TRANSIENT_DECAY_RATE: f64 = 5.0;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Sample rate must be positive (got {0} Hz)")]
    InvalidSampleRate(f64),

    #[error("Duration must be positive (got {0} s)")]
    InvalidDuration(f64),
}

/// Synthesizer configuration
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Sample rate in samples per second
    pub sample_rate: f64,

    /// Signal duration in seconds
    pub duration: f64,

    /// Scale applied to the unit-variance noise; 0 disables the noise path
    pub noise_scale: f64,

    /// Optional noise seed for reproducible output
    pub noise_seed: Option<u64>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: 2000.0,
            duration: 1.0,
            noise_scale: 0.2,
            noise_seed: None,
        }
    }
}

/// Time-domain signal: equal-length timestamps and amplitude samples
#[derive(Debug, Clone)]
pub struct TimeSeries {
    /// Sample times in seconds, uniformly spaced, starting at 0
    pub timestamps: Vec<f64>,

    /// Amplitude samples
    pub amplitudes: Vec<f64>,
}

impl TimeSeries {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Whether the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }
}

/// Synthesize the demonstration waveform
///
/// Produces `floor(sample_rate * duration)` samples covering
/// `[0, duration)`. Each sample is the sum of the three fixed components
/// plus scaled Gaussian noise.
///
/// # Arguments
/// * `config` - Sample rate, duration, and noise settings
///
/// # Returns
/// Time series with timestamps and amplitudes of equal length
pub fn synthesize(config: &SynthConfig) -> Result<TimeSeries, SignalError> {
    if config.sample_rate <= 0.0 {
        return Err(SignalError::InvalidSampleRate(config.sample_rate));
    }
    if config.duration <= 0.0 {
        return Err(SignalError::InvalidDuration(config.duration));
    }

    let num_samples = (config.sample_rate * config.duration) as usize;
    if num_samples == 0 {
        // Duration shorter than one sample period
        return Err(SignalError::InvalidDuration(config.duration));
    }

    let dt = 1.0 / config.sample_rate;
    let mut noise = if config.noise_scale != 0.0 {
        Some(NoiseSource::new(config.noise_seed))
    } else {
        None
    };

    let mut timestamps = Vec::with_capacity(num_samples);
    let mut amplitudes = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f64 * dt;

        let mut sample = PRIMARY_AMPLITUDE * (2.0 * PI * PRIMARY_FREQ_HZ * t).sin()
            + SECONDARY_AMPLITUDE * (2.0 * PI * SECONDARY_FREQ_HZ * t).sin();

        // Decaying transient burst
        sample += TRANSIENT_AMPLITUDE
            * (2.0 * PI * TRANSIENT_FREQ_HZ * t).sin()
            * (-TRANSIENT_DECAY_RATE * t).exp();

        if let Some(noise) = noise.as_mut() {
            sample += config.noise_scale * noise.next_sample();
        }

        timestamps.push(t);
        amplitudes.push(sample);
    }

    Ok(TimeSeries {
        timestamps,
        amplitudes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_and_timestamps() {
        let config = SynthConfig {
            sample_rate: 2000.0,
            duration: 1.0,
            ..Default::default()
        };

        let series = synthesize(&config).unwrap();

        assert_eq!(series.len(), 2000);
        assert_eq!(series.timestamps.len(), series.amplitudes.len());
        assert_eq!(series.timestamps[0], 0.0);

        // Strictly ascending, uniform spacing, duration exclusive
        for pair in series.timestamps.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - 0.0005).abs() < 1e-12);
        }
        assert!(*series.timestamps.last().unwrap() < config.duration);
    }

    #[test]
    fn test_fractional_sample_count_truncates() {
        let config = SynthConfig {
            sample_rate: 1000.0,
            duration: 0.0015,
            ..Default::default()
        };

        let series = synthesize(&config).unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_invalid_arguments() {
        let zero_rate = SynthConfig {
            sample_rate: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            synthesize(&zero_rate),
            Err(SignalError::InvalidSampleRate(_))
        ));

        let zero_duration = SynthConfig {
            duration: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            synthesize(&zero_duration),
            Err(SignalError::InvalidDuration(_))
        ));

        let negative_duration = SynthConfig {
            duration: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            synthesize(&negative_duration),
            Err(SignalError::InvalidDuration(_))
        ));

        // Duration so short that the truncated sample count is zero
        let sub_sample = SynthConfig {
            sample_rate: 10.0,
            duration: 0.05,
            ..Default::default()
        };
        assert!(synthesize(&sub_sample).is_err());
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let config = SynthConfig {
            noise_seed: Some(1234),
            ..Default::default()
        };

        let a = synthesize(&config).unwrap();
        let b = synthesize(&config).unwrap();

        assert_eq!(a.timestamps, b.timestamps);
        assert_eq!(a.amplitudes, b.amplitudes);
    }

    #[test]
    fn test_noiseless_output_matches_component_sum() {
        let config = SynthConfig {
            sample_rate: 2000.0,
            duration: 0.5,
            noise_scale: 0.0,
            noise_seed: None,
        };

        let series = synthesize(&config).unwrap();

        for (&t, &a) in series.timestamps.iter().zip(series.amplitudes.iter()) {
            let expected = (2.0 * PI * 50.0 * t).sin()
                + 0.6 * (2.0 * PI * 120.0 * t).sin()
                + 0.3 * (2.0 * PI * 300.0 * t).sin() * (-5.0 * t).exp();
            assert!((a - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_noise_perturbs_samples() {
        let clean = SynthConfig {
            noise_scale: 0.0,
            ..Default::default()
        };
        let noisy = SynthConfig {
            noise_scale: 0.2,
            noise_seed: Some(99),
            ..Default::default()
        };

        let a = synthesize(&clean).unwrap();
        let b = synthesize(&noisy).unwrap();

        assert_eq!(a.len(), b.len());
        assert_ne!(a.amplitudes, b.amplitudes);
    }
}
