//! Core types for the Gati library.
//!
//! ## Type Categories
//!
//! ### Positions
//! - [`TimedPoint`]: A 2D position with its timestamp
//! - [`ObservationPair`]: Two validated observations, oldest first
//! - [`CandidateCloud`]: K position hypotheses at one horizon
//!
//! ### Motion
//! - [`MotionEstimate`]: Finite-difference velocity and heading
//! - [`NoiseParams`]: Speed and heading noise magnitudes
//! - [`NoiseGenerator`]: Seedable Gaussian sampler
//!
//! All angles are radians, counter-clockwise positive from +X.

mod cloud;
mod motion;
mod noise;
mod point;

pub mod math;

pub use cloud::CandidateCloud;
pub use motion::MotionEstimate;
pub use noise::{NoiseGenerator, NoiseParams};
pub use point::{ObservationPair, TimedPoint};
