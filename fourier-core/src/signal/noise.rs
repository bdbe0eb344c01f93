//! Gaussian noise source for the synthesizer
//!
//! Seedable so that tests can pin the output; unseeded runs draw from OS
//! entropy and are intentionally not reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Zero-mean, unit-variance Gaussian noise generator
pub struct NoiseSource {
    rng: StdRng,
    dist: Normal<f64>,
}

impl NoiseSource {
    /// Create a noise source
    ///
    /// # Arguments
    /// * `seed` - Optional seed; `None` seeds from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Unit standard deviation is always a valid parameterization
        let dist = Normal::new(0.0, 1.0).expect("unit normal distribution");

        Self { rng, dist }
    }

    /// Draw the next noise sample
    pub fn next_sample(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }
}
