//! Main GatiConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::driver::DriverConfig;

use super::error::ConfigLoadError;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full Gati configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct GatiConfig {
    /// Extrapolation settings
    #[serde(default)]
    pub extrapolation: DriverConfig,
}

impl GatiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    ///
    /// Falls back to built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load `path` if it exists, otherwise use built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigLoadError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Get the driver config
    pub fn driver_config(&self) -> DriverConfig {
        self.extrapolation.clone()
    }
}
