//! Configuration loading for Gati.
//!
//! Loads driver settings from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gati::config::GatiConfig;
//!
//! // Load from default path (configs/config.yaml), or defaults if absent
//! let config = GatiConfig::load_default()?;
//!
//! let driver = CloudDriver::new(config.driver_config())?;
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! extrapolation:
//!   dt: 0.05            # seconds per step
//!   speed_std: 1.0      # speed noise std-dev
//!   heading_std: 0.1745 # heading noise std-dev (radians)
//!   samples: 100        # candidates per cloud
//!   anchor: shared      # shared | predecessor
//!   seed: 0             # 0 = entropy
//! ```

mod error;
mod gati;

pub use error::ConfigLoadError;
pub use gati::{DEFAULT_CONFIG_PATH, GatiConfig};
