//! # Gati
//!
//! Stochastic constant-velocity extrapolation of a moving 2D point.
//!
//! ## Overview
//!
//! Given the two most recent timestamped positions of a point, Gati
//! estimates its velocity and heading, then samples a cloud of K candidate
//! positions one time step ahead by perturbing speed and heading with
//! independent Gaussian noise. Feeding each cloud back in produces a
//! multi-step fan-out of spatial uncertainty.
//!
//! - [`predict_step`]: stateless single-step sampler
//! - [`CloudDriver`]: stateful driver that seeds from observations and
//!   advances its own cloud between them
//! - [`config`]: YAML configuration with defaults
//!
//! The noise model is a heuristic for visualizing uncertainty. It is not a
//! calibrated filter.
//!
//! ## Quick Start
//!
//! ```rust
//! use gati::{CloudDriver, DriverConfig, ObservationPair};
//!
//! let mut driver = CloudDriver::new(DriverConfig {
//!     samples: 100,
//!     seed: 7,
//!     ..Default::default()
//! }).unwrap();
//!
//! // Seed with two observations: (t, x, y) = (0.2, 2, 2) then (0.3, 3, 3)
//! let pair = ObservationPair::from_columns([0.2, 0.3], [2.0, 3.0], [2.0, 3.0]).unwrap();
//! let cloud = driver.step(Some(&pair)).unwrap();
//! assert_eq!(cloud.len(), 100);
//!
//! // Advance without new input, once per frame
//! for _ in 0..3 {
//!     let cloud = driver.step(None).unwrap();
//!     let (cx, cy) = cloud.centroid().unwrap();
//!     println!("t={:.2} centroid=({:.2}, {:.2})", cloud.horizon().unwrap(), cx, cy);
//! }
//! ```
//!
//! ## Coordinate System
//!
//! Positions are plain Cartesian (x, y). Headings are radians,
//! counter-clockwise positive from +X. Timestamps are seconds.

#![warn(missing_docs)]

// Core types
pub mod core;

// Single-step sampler
pub mod predictor;

// Stateful multi-step driver
pub mod driver;

// Configuration loading
pub mod config;

mod error;

// Re-export commonly used types
pub use self::core::{
    CandidateCloud, MotionEstimate, NoiseGenerator, NoiseParams, ObservationPair, TimedPoint,
};

pub use predictor::predict_step;

pub use driver::{AnchorMode, CloudDriver, DriverConfig, DriverPhase};

pub use config::{ConfigLoadError, GatiConfig};

pub use error::{Error, Result};
