//! Configuration file loading tests.

mod common;

use std::fs;

use gati::{AnchorMode, CloudDriver, ConfigLoadError, GatiConfig};
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "extrapolation:\n  dt: 0.1\n  speed_std: 0.5\n  samples: 12\n  anchor: predecessor\n  seed: 3\n",
    )
    .unwrap();

    let config = GatiConfig::load(&path).unwrap();
    let driver_config = config.driver_config();
    assert_eq!(driver_config.dt, 0.1);
    assert_eq!(driver_config.noise.speed_std, 0.5);
    assert_eq!(driver_config.samples, 12);
    assert_eq!(driver_config.anchor, AnchorMode::Predecessor);
    assert_eq!(driver_config.seed, 3);

    let mut driver = CloudDriver::new(driver_config).unwrap();
    let cloud = driver.step(Some(&common::reference_pair())).unwrap();
    assert_eq!(cloud.len(), 12);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = GatiConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io(_)));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = GatiConfig::load_or_default(&dir.path().join("absent.yaml")).unwrap();
    assert_eq!(config, GatiConfig::default());
}

#[test]
fn test_saved_config_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.yaml");

    let mut config = GatiConfig::default();
    config.extrapolation.samples = 64;
    config.extrapolation.anchor = AnchorMode::Predecessor;
    fs::write(&path, config.to_yaml().unwrap()).unwrap();

    assert_eq!(GatiConfig::load(&path).unwrap(), config);
}

#[test]
fn test_invalid_values_rejected_by_driver() {
    // The file parses, but the driver refuses a zero time step.
    let config = GatiConfig::from_yaml("extrapolation:\n  dt: 0.0\n").unwrap();
    let err = CloudDriver::new(config.driver_config()).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.code(), "INVALID_TIME_STEP");
}

#[test]
fn test_shipped_config_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/config.yaml");
    let config = GatiConfig::load(&path).unwrap();
    assert_eq!(config, GatiConfig::default());
}
