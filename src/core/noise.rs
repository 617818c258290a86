//! Gaussian noise for speed and heading perturbation.
//!
//! Provides the noise magnitudes used by the predictor and a seedable
//! generator so that clouds can be reproduced exactly in tests.

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Standard deviations of the speed and heading perturbations.
///
/// Defaults to 1.0 speed units and 10 degrees of heading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Speed noise std-dev (position units per second)
    #[serde(default = "default_speed_std")]
    pub speed_std: f64,
    /// Heading noise std-dev (radians)
    #[serde(default = "default_heading_std")]
    pub heading_std: f64,
}

fn default_speed_std() -> f64 {
    1.0
}

fn default_heading_std() -> f64 {
    10f64.to_radians()
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self::new(default_speed_std(), default_heading_std())
    }
}

impl NoiseParams {
    /// Create noise parameters.
    pub const fn new(speed_std: f64, heading_std: f64) -> Self {
        Self {
            speed_std,
            heading_std,
        }
    }

    /// No noise: every sample equals the constant-velocity extrapolation.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Check both deviations are non-negative and finite.
    pub fn validate(&self) -> Result<()> {
        check_std("speed", self.speed_std)?;
        check_std("heading", self.heading_std)
    }
}

fn check_std(name: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidNoise { name, value })
    }
}

/// Noise generator with configurable seed for reproducibility
#[derive(Clone, Debug)]
pub struct NoiseGenerator {
    rng: SmallRng,
}

impl NoiseGenerator {
    /// Create a new noise generator
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }

    /// Generate zero-mean Gaussian noise with given standard deviation
    ///
    /// A zero deviation returns exactly 0.0 without consuming randomness.
    #[inline]
    pub fn gaussian(&mut self, stddev: f64) -> f64 {
        if stddev == 0.0 {
            return 0.0;
        }
        let n: f64 = self.rng.sample(StandardNormal);
        n * stddev
    }

    /// Generate Gaussian noise around `mean`
    #[inline]
    pub fn normal(&mut self, mean: f64, stddev: f64) -> f64 {
        mean + self.gaussian(stddev)
    }

    /// Draw `n` samples from Normal(mean, stddev), in draw order.
    pub fn normal_batch(&mut self, mean: f64, stddev: f64, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.normal(mean, stddev)).collect()
    }
}
