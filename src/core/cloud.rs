//! Candidate clouds: K position hypotheses at one prediction horizon.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::point::TimedPoint;

/// An ordered set of candidate positions sharing one timestamp.
///
/// Order follows sample draw order and carries no other meaning.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateCloud {
    points: Vec<TimedPoint>,
}

impl CandidateCloud {
    /// Empty cloud
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-sampled points.
    pub fn from_points(points: Vec<TimedPoint>) -> Self {
        Self { points }
    }

    /// Number of candidates
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no candidates
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Candidate points as a slice
    #[inline]
    pub fn points(&self) -> &[TimedPoint] {
        &self.points
    }

    /// Iterate over candidates
    pub fn iter(&self) -> std::slice::Iter<'_, TimedPoint> {
        self.points.iter()
    }

    /// Consume the cloud, returning its points
    pub fn into_points(self) -> Vec<TimedPoint> {
        self.points
    }

    /// Prediction horizon (the shared timestamp), `None` when empty.
    pub fn horizon(&self) -> Option<f64> {
        self.points.first().map(|p| p.t)
    }

    /// Mean position, `None` when empty.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some((sx / n, sy / n))
    }

    /// RMS distance of the candidates from their centroid.
    ///
    /// Zero for an empty or single-point cloud.
    pub fn spread(&self) -> f64 {
        let Some((cx, cy)) = self.centroid() else {
            return 0.0;
        };
        let sum_sq: f64 = self
            .points
            .iter()
            .map(|p| (p.x - cx).powi(2) + (p.y - cy).powi(2))
            .sum();
        (sum_sq / self.points.len() as f64).sqrt()
    }

    /// Axis-aligned bounds as `((min_x, min_y), (max_x, max_y))`.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let first = self.points.first()?;
        let init = ((first.x, first.y), (first.x, first.y));
        Some(self.points.iter().fold(init, |((x0, y0), (x1, y1)), p| {
            ((x0.min(p.x), y0.min(p.y)), (x1.max(p.x), y1.max(p.y)))
        }))
    }
}

impl Index<usize> for CandidateCloud {
    type Output = TimedPoint;

    fn index(&self, index: usize) -> &TimedPoint {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a CandidateCloud {
    type Item = &'a TimedPoint;
    type IntoIter = std::slice::Iter<'a, TimedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<TimedPoint> for CandidateCloud {
    fn from_iter<I: IntoIterator<Item = TimedPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
