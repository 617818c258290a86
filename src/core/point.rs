//! Timestamped positions and observation pairs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D position with the time it was observed or predicted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimedPoint {
    /// Timestamp in seconds
    pub t: f64,
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
}

impl TimedPoint {
    /// Create a new timestamped point
    #[inline]
    pub const fn new(t: f64, x: f64, y: f64) -> Self {
        Self { t, x, y }
    }

    /// Euclidean distance to another point (time is ignored)
    #[inline]
    pub fn distance(&self, other: &TimedPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The two most recent observations of a moving point, oldest first.
///
/// Construction guarantees `current.t > last.t`, so the elapsed time used
/// for velocity estimation is never zero.
///
/// # Example
///
/// ```
/// use gati::core::{ObservationPair, TimedPoint};
///
/// let pair = ObservationPair::new(
///     TimedPoint::new(0.2, 2.0, 2.0),
///     TimedPoint::new(0.3, 3.0, 3.0),
/// ).unwrap();
/// assert!((pair.elapsed() - 0.1).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObservationPair {
    last: TimedPoint,
    current: TimedPoint,
}

impl ObservationPair {
    /// Create a pair from the older (`last`) and newer (`current`) observation.
    pub fn new(last: TimedPoint, current: TimedPoint) -> Result<Self> {
        validate_anchors(&last, &current)?;
        Ok(Self { last, current })
    }

    /// Create a pair from column buffers: `([t0, t1], [x0, x1], [y0, y1])`.
    pub fn from_columns(ts: [f64; 2], xs: [f64; 2], ys: [f64; 2]) -> Result<Self> {
        Self::new(
            TimedPoint::new(ts[0], xs[0], ys[0]),
            TimedPoint::new(ts[1], xs[1], ys[1]),
        )
    }

    /// Older observation
    #[inline]
    pub fn last(&self) -> &TimedPoint {
        &self.last
    }

    /// Newer observation
    #[inline]
    pub fn current(&self) -> &TimedPoint {
        &self.current
    }

    /// Time between the two observations (always positive)
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.current.t - self.last.t
    }
}

/// Check that two anchors have finite, strictly increasing timestamps.
pub(crate) fn validate_anchors(last: &TimedPoint, current: &TimedPoint) -> Result<()> {
    // Also rejects NaN timestamps, which compare false.
    if current.t - last.t > 0.0 && last.t.is_finite() && current.t.is_finite() {
        Ok(())
    } else {
        Err(Error::NonIncreasingTime {
            last: last.t,
            current: current.t,
        })
    }
}
