//! Shared fixtures for Gati integration tests.

#![allow(dead_code)]

use gati::{AnchorMode, CloudDriver, DriverConfig, NoiseParams, ObservationPair, TimedPoint};

/// Time step used by the reference scenario.
pub const DT: f64 = 0.05;

/// Older observation of the reference scenario.
pub const LAST: TimedPoint = TimedPoint::new(0.2, 2.0, 2.0);

/// Newer observation of the reference scenario.
pub const CURRENT: TimedPoint = TimedPoint::new(0.3, 3.0, 3.0);

/// Reference pair: moving at (10, 10) units/s along the diagonal.
pub fn reference_pair() -> ObservationPair {
    ObservationPair::new(LAST, CURRENT).expect("reference pair is valid")
}

/// Demo heading noise (10 degrees).
pub fn demo_noise() -> NoiseParams {
    NoiseParams::new(1.0, 10f64.to_radians())
}

/// Build a seeded driver with the reference time step.
pub fn build_driver(samples: usize, noise: NoiseParams, anchor: AnchorMode, seed: u64) -> CloudDriver {
    CloudDriver::new(DriverConfig {
        dt: DT,
        noise,
        samples,
        anchor,
        seed,
    })
    .expect("valid driver config")
}

/// A straight-line track sampled every `dt` seconds at velocity (vx, vy).
pub fn straight_track(n: usize, dt: f64, vx: f64, vy: f64) -> Vec<TimedPoint> {
    (0..n)
        .map(|i| {
            let t = i as f64 * dt;
            TimedPoint::new(t, vx * t, vy * t)
        })
        .collect()
}
