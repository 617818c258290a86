//! Single-step stochastic extrapolation.
//!
//! Given two anchors, the predictor estimates a constant velocity and
//! samples K candidate positions one time step ahead:
//!
//! ```text
//!   speed_k ~ N(v, speed_std)        beta_k ~ N(0, heading_std)
//!   r_k     = speed_k * dt
//!   x_k     = current.x + r_k * cos(psi + beta_k)
//!   y_k     = current.y + r_k * sin(psi + beta_k)
//!   t_k     = current.t + dt
//! ```
//!
//! A sampled speed below zero is kept as drawn. It places the candidate
//! behind `current` along the sampled heading.

use crate::core::{CandidateCloud, MotionEstimate, NoiseGenerator, NoiseParams, TimedPoint};
use crate::error::{Error, Result};

/// Sample `samples` candidate positions `dt` seconds after `current`.
///
/// All speeds are drawn before all heading offsets, so a given seed
/// reproduces the same cloud. Inputs are never modified.
///
/// # Errors
/// - [`Error::InvalidTimeStep`] if `dt` is not positive and finite
/// - [`Error::ZeroSamples`] if `samples == 0`
/// - [`Error::InvalidNoise`] if a deviation is negative or not finite
/// - [`Error::NonIncreasingTime`] if `current.t <= last.t`
///
/// # Example
///
/// ```
/// use gati::core::{NoiseGenerator, NoiseParams, TimedPoint};
/// use gati::predict_step;
///
/// let mut rng = NoiseGenerator::new(1);
/// let cloud = predict_step(
///     &TimedPoint::new(0.2, 2.0, 2.0),
///     &TimedPoint::new(0.3, 3.0, 3.0),
///     0.05,
///     &NoiseParams::zero(),
///     1,
///     &mut rng,
/// ).unwrap();
///
/// assert!((cloud[0].x - 3.5).abs() < 1e-9);
/// assert!((cloud[0].y - 3.5).abs() < 1e-9);
/// ```
pub fn predict_step(
    last: &TimedPoint,
    current: &TimedPoint,
    dt: f64,
    noise: &NoiseParams,
    samples: usize,
    rng: &mut NoiseGenerator,
) -> Result<CandidateCloud> {
    validate_step(dt, noise, samples)?;
    let motion = MotionEstimate::from_anchors(last, current)?;

    let speeds = rng.normal_batch(motion.speed, noise.speed_std, samples);
    let betas = rng.normal_batch(0.0, noise.heading_std, samples);

    let t = current.t + dt;
    Ok(speeds
        .iter()
        .zip(&betas)
        .map(|(speed, beta)| {
            let r = speed * dt;
            let (sin, cos) = (motion.heading + beta).sin_cos();
            TimedPoint::new(t, current.x + r * cos, current.y + r * sin)
        })
        .collect())
}

/// Check the per-step parameters shared by the predictor and the driver.
pub(crate) fn validate_step(dt: f64, noise: &NoiseParams, samples: usize) -> Result<()> {
    if !(dt > 0.0 && dt.is_finite()) {
        return Err(Error::InvalidTimeStep(dt));
    }
    if samples == 0 {
        return Err(Error::ZeroSamples);
    }
    noise.validate()
}
