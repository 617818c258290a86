//! Angle utilities.
//!
//! All angles are in radians, counter-clockwise positive from +X.

use std::f64::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f64 = 2.0 * PI;

/// Normalize angle to [-π, π).
///
/// # Example
/// ```
/// use gati::core::math::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert!((normalize_angle(PI / 2.0) - PI / 2.0).abs() < 1e-12);
/// assert!((normalize_angle(5.0 * PI / 2.0) - PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TWO_PI;
    if a >= PI {
        a -= TWO_PI;
    } else if a < -PI {
        a += TWO_PI;
    }
    a
}

/// Signed shortest angular distance from `from` to `to`, in [-π, π).
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}
