//! Constant-velocity motion estimate from two anchors.

use super::point::{TimedPoint, validate_anchors};
use crate::error::Result;

/// Instantaneous velocity derived from an anchor pair.
///
/// The estimate is the finite difference between the two anchors:
/// velocity components, their magnitude, and the direction of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionEstimate {
    /// X velocity (units per second)
    pub vx: f64,
    /// Y velocity (units per second)
    pub vy: f64,
    /// Speed, magnitude of (vx, vy)
    pub speed: f64,
    /// Direction of travel in radians, CCW from +X
    pub heading: f64,
}

impl MotionEstimate {
    /// Estimate motion from `last` to `current`.
    ///
    /// Fails if `current.t <= last.t`.
    pub fn from_anchors(last: &TimedPoint, current: &TimedPoint) -> Result<Self> {
        validate_anchors(last, current)?;

        let dt = current.t - last.t;
        let dx = current.x - last.x;
        let dy = current.y - last.y;
        let vx = dx / dt;
        let vy = dy / dt;

        Ok(Self {
            vx,
            vy,
            speed: (vx * vx + vy * vy).sqrt(),
            heading: dy.atan2(dx),
        })
    }

    /// Deterministic position after `dt` seconds of travel from `origin`.
    pub fn extrapolate(&self, origin: &TimedPoint, dt: f64) -> TimedPoint {
        let r = self.speed * dt;
        TimedPoint::new(
            origin.t + dt,
            origin.x + r * self.heading.cos(),
            origin.y + r * self.heading.sin(),
        )
    }
}
