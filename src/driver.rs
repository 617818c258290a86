//! Multi-step cloud driver.
//!
//! [`CloudDriver`] holds the evolving candidate cloud between calls and
//! chains [`predict_step`] across forward steps. Each call to
//! [`CloudDriver::step`] either seeds the cloud from a fresh observation
//! pair or advances the held cloud by one more time step.
//!
//! # State machine
//!
//! ```text
//!                 step(Some(pair))              step(None)
//!  Uninitialized ─────────────────▶ Seeded ─────────────────▶ Advancing ─┐
//!        │                           ▲  ▲                        │  ▲      │ step(None)
//!        │ step(None) => NotSeeded   │  └────────────────────────┘  └──────┘
//!        ▼                           │       step(Some(pair))
//!      Error                         └── step(Some(pair)) from any state
//! ```
//!
//! # Example
//!
//! ```
//! use gati::{CloudDriver, DriverConfig, ObservationPair};
//!
//! let mut driver = CloudDriver::new(DriverConfig {
//!     samples: 5,
//!     seed: 42,
//!     ..Default::default()
//! }).unwrap();
//!
//! let pair = ObservationPair::from_columns([0.2, 0.3], [2.0, 3.0], [2.0, 3.0]).unwrap();
//! let seeded = driver.step(Some(&pair)).unwrap().clone();
//! let advanced = driver.step(None).unwrap();
//!
//! assert_eq!(seeded.len(), 5);
//! assert_eq!(advanced.len(), 5);
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{CandidateCloud, NoiseGenerator, NoiseParams, ObservationPair, TimedPoint};
use crate::error::{Error, Result};
use crate::predictor::{predict_step, validate_step};

/// Which point serves as the older anchor when advancing a candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorMode {
    /// Every candidate is extrapolated from the single anchor recorded at
    /// seed time (the observation's newer point). Advances do not move it.
    #[default]
    Shared,
    /// Every candidate is extrapolated from its own predecessor, giving
    /// independent per-candidate trajectories.
    Predecessor,
}

/// Driver configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Forward time step per call (seconds)
    #[serde(default = "default_dt")]
    pub dt: f64,

    /// Speed and heading noise
    #[serde(flatten)]
    pub noise: NoiseParams,

    /// Candidates per cloud (K)
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Anchor used when advancing
    #[serde(default)]
    pub anchor: AnchorMode,

    /// RNG seed, 0 = entropy
    #[serde(default)]
    pub seed: u64,
}

fn default_dt() -> f64 {
    0.05
}

fn default_samples() -> usize {
    100
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            noise: NoiseParams::default(),
            samples: default_samples(),
            anchor: AnchorMode::Shared,
            seed: 0,
        }
    }
}

impl DriverConfig {
    /// Check dt, sample count and noise magnitudes.
    pub fn validate(&self) -> Result<()> {
        validate_step(self.dt, &self.noise, self.samples)
    }
}

/// Externally visible driver phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverPhase {
    /// No observation received yet
    Uninitialized,
    /// Cloud was just computed from an observation
    Seeded,
    /// Cloud has been advanced at least once since the last seed
    Advancing,
}

/// Anchors used for the next advance.
#[derive(Clone, Debug)]
enum Anchors {
    Shared(TimedPoint),
    PerCandidate(Vec<TimedPoint>),
}

impl Anchors {
    fn get(&self, index: usize) -> &TimedPoint {
        match self {
            Anchors::Shared(anchor) => anchor,
            Anchors::PerCandidate(anchors) => &anchors[index],
        }
    }
}

#[derive(Clone, Debug)]
enum DriverState {
    Uninitialized,
    Active {
        anchors: Anchors,
        cloud: CandidateCloud,
        steps: usize,
    },
}

/// Stateful multi-step extrapolator.
///
/// Owns the current candidate cloud and its noise generator. Nothing
/// outside the driver can read or modify either.
#[derive(Clone, Debug)]
pub struct CloudDriver {
    config: DriverConfig,
    rng: NoiseGenerator,
    state: DriverState,
    /// Returned by `cloud()` while uninitialized
    empty: CandidateCloud,
}

impl CloudDriver {
    /// Create a driver. Fails if the configuration is invalid.
    pub fn new(config: DriverConfig) -> Result<Self> {
        config.validate()?;
        let rng = NoiseGenerator::new(config.seed);
        Ok(Self {
            config,
            rng,
            state: DriverState::Uninitialized,
            empty: CandidateCloud::new(),
        })
    }

    /// Create a driver from the four core parameters with shared anchoring.
    pub fn with_params(dt: f64, speed_std: f64, heading_std: f64, samples: usize) -> Result<Self> {
        Self::new(DriverConfig {
            dt,
            noise: NoiseParams::new(speed_std, heading_std),
            samples,
            ..Default::default()
        })
    }

    /// Seed from `observation` if present, otherwise advance the held cloud.
    ///
    /// # Errors
    /// [`Error::NotSeeded`] when `observation` is `None` and no cloud has
    /// been seeded yet.
    pub fn step(&mut self, observation: Option<&ObservationPair>) -> Result<&CandidateCloud> {
        match observation {
            Some(pair) => self.seed(pair),
            None => self.advance(),
        }
    }

    /// Replace any held cloud with one predicted from `pair`.
    pub fn seed(&mut self, pair: &ObservationPair) -> Result<&CandidateCloud> {
        let cloud = predict_step(
            pair.last(),
            pair.current(),
            self.config.dt,
            &self.config.noise,
            self.config.samples,
            &mut self.rng,
        )?;

        let anchor = *pair.current();
        let anchors = match self.config.anchor {
            AnchorMode::Shared => Anchors::Shared(anchor),
            AnchorMode::Predecessor => Anchors::PerCandidate(vec![anchor; cloud.len()]),
        };

        if !matches!(self.state, DriverState::Uninitialized) {
            debug!("Re-seeding driver, discarding {} step(s)", self.steps_since_seed());
        }
        debug!(
            "Seeded {} candidates at t={:.3} from anchor ({:.3}, {:.3})",
            cloud.len(),
            anchor.t + self.config.dt,
            anchor.x,
            anchor.y
        );

        self.state = DriverState::Active {
            anchors,
            cloud,
            steps: 0,
        };
        Ok(self.cloud())
    }

    /// Extrapolate every held candidate one step forward.
    ///
    /// Each candidate `p` is paired with its anchor to form a synthetic
    /// observation and predicted with a single sample.
    pub fn advance(&mut self) -> Result<&CandidateCloud> {
        let DriverState::Active {
            anchors,
            cloud,
            steps,
        } = &mut self.state
        else {
            return Err(Error::NotSeeded);
        };

        let mut next = Vec::with_capacity(cloud.len());
        for (i, p) in cloud.iter().enumerate() {
            let single = predict_step(
                anchors.get(i),
                p,
                self.config.dt,
                &self.config.noise,
                1,
                &mut self.rng,
            )?;
            next.extend(single.into_points());
        }

        let previous = std::mem::replace(cloud, CandidateCloud::from_points(next));
        if let Anchors::PerCandidate(per) = anchors {
            *per = previous.into_points();
        }
        *steps += 1;

        trace!(
            "Advanced {} candidates to t={:.3} (step {})",
            cloud.len(),
            cloud.horizon().unwrap_or_default(),
            steps
        );
        Ok(&*cloud)
    }

    /// Drop the held cloud and return to the uninitialized phase.
    pub fn reset(&mut self) {
        self.state = DriverState::Uninitialized;
    }

    /// Current cloud (empty while uninitialized).
    pub fn cloud(&self) -> &CandidateCloud {
        match &self.state {
            DriverState::Uninitialized => &self.empty,
            DriverState::Active { cloud, .. } => cloud,
        }
    }

    /// Current phase
    pub fn phase(&self) -> DriverPhase {
        match self.state {
            DriverState::Uninitialized => DriverPhase::Uninitialized,
            DriverState::Active { steps: 0, .. } => DriverPhase::Seeded,
            DriverState::Active { .. } => DriverPhase::Advancing,
        }
    }

    /// Number of advances since the last seed.
    pub fn steps_since_seed(&self) -> usize {
        match self.state {
            DriverState::Uninitialized => 0,
            DriverState::Active { steps, .. } => steps,
        }
    }

    /// Driver configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }
}
