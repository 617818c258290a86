//! End-to-end driver scenarios.
//!
//! These tests run the driver the way a rendering loop would: seed once,
//! then advance once per frame without new input.

mod common;

use approx::assert_relative_eq;
use gati::{
    AnchorMode, CloudDriver, DriverPhase, Error, NoiseGenerator, NoiseParams, ObservationPair,
    predict_step,
};

// ============================================================================
// Seeding
// ============================================================================

#[test]
fn test_seed_reference_scenario() {
    let mut driver = common::build_driver(5, common::demo_noise(), AnchorMode::Shared, 42);
    let cloud = driver.step(Some(&common::reference_pair())).unwrap();

    assert_eq!(cloud.len(), 5);
    for p in cloud {
        assert_relative_eq!(p.t, 0.35, epsilon = 1e-12);
        // Clustered around (3.5, 3.5): one step of noise is well under a unit.
        assert!((p.x - 3.5).abs() < 0.5, "x={}", p.x);
        assert!((p.y - 3.5).abs() < 0.5, "y={}", p.y);
    }
}

#[test]
fn test_seed_matches_batch_prediction() {
    // A seeded cloud is exactly one batch call with the driver's RNG stream.
    let noise = common::demo_noise();
    let mut driver = common::build_driver(16, noise, AnchorMode::Shared, 99);
    let seeded = driver.step(Some(&common::reference_pair())).unwrap().clone();

    let mut rng = NoiseGenerator::new(99);
    let batch = predict_step(&common::LAST, &common::CURRENT, common::DT, &noise, 16, &mut rng)
        .unwrap();

    assert_eq!(seeded, batch);
}

#[test]
fn test_spread_grows_with_noise() {
    let pair = common::reference_pair();
    let mut spreads = Vec::new();

    for noise in [
        NoiseParams::zero(),
        NoiseParams::new(0.5, 0.05),
        NoiseParams::new(2.0, 0.2),
        NoiseParams::new(8.0, 0.8),
    ] {
        let mut driver = common::build_driver(500, noise, AnchorMode::Shared, 5);
        spreads.push(driver.step(Some(&pair)).unwrap().spread());
    }

    assert_eq!(spreads[0], 0.0);
    for w in spreads.windows(2) {
        assert!(w[1] > w[0], "spreads not increasing: {:?}", spreads);
    }
}

// ============================================================================
// Advancing
// ============================================================================

#[test]
fn test_second_step_extrapolates_each_candidate() {
    let noise = common::demo_noise();
    let mut driver = common::build_driver(5, noise, AnchorMode::Shared, 42);
    let first = driver.step(Some(&common::reference_pair())).unwrap().clone();
    let second = driver.step(None).unwrap().clone();

    assert_eq!(second.len(), 5);
    for p in &second {
        assert_relative_eq!(p.t, 0.40, epsilon = 1e-9);
    }

    // Reproduce the advance by hand: each candidate is predicted from
    // (seed anchor, its own predecessor) with one sample, in order.
    let mut rng = NoiseGenerator::new(42);
    predict_step(&common::LAST, &common::CURRENT, common::DT, &noise, 5, &mut rng).unwrap();
    for (p, q) in first.iter().zip(second.iter()) {
        let expected = predict_step(&common::CURRENT, p, common::DT, &noise, 1, &mut rng).unwrap();
        assert_eq!(expected[0], *q);
    }
}

#[test]
fn test_zero_noise_follows_constant_velocity() {
    let mut driver = common::build_driver(4, NoiseParams::zero(), AnchorMode::Shared, 1);
    driver.step(Some(&common::reference_pair())).unwrap();

    for frame in 1..=10 {
        let cloud = driver.step(None).unwrap();
        let expected_t = 0.35 + frame as f64 * common::DT;
        let expected_xy = 3.5 + frame as f64 * 0.5;
        for p in cloud {
            assert_relative_eq!(p.t, expected_t, epsilon = 1e-9);
            assert_relative_eq!(p.x, expected_xy, epsilon = 1e-8);
            assert_relative_eq!(p.y, expected_xy, epsilon = 1e-8);
        }
    }
}

#[test]
fn test_cloud_fans_out_over_frames() {
    let mut driver = common::build_driver(300, common::demo_noise(), AnchorMode::Shared, 8);
    let mut spread = driver.step(Some(&common::reference_pair())).unwrap().spread();

    for _ in 0..5 {
        let next = driver.step(None).unwrap().spread();
        assert!(next > spread, "spread shrank: {} -> {}", spread, next);
        spread = next;
    }
}

#[test]
fn test_predecessor_mode_matches_manual_chain() {
    let noise = common::demo_noise();
    let mut driver = common::build_driver(6, noise, AnchorMode::Predecessor, 17);
    let seeded = driver.step(Some(&common::reference_pair())).unwrap().clone();
    let first = driver.step(None).unwrap().clone();
    let second = driver.step(None).unwrap().clone();

    let mut rng = NoiseGenerator::new(17);
    predict_step(&common::LAST, &common::CURRENT, common::DT, &noise, 6, &mut rng).unwrap();

    // First advance: every candidate still pairs with the seed anchor.
    for (p, f) in seeded.iter().zip(first.iter()) {
        let q = predict_step(&common::CURRENT, p, common::DT, &noise, 1, &mut rng).unwrap();
        assert_eq!(q[0], *f);
    }
    // Second advance: each candidate pairs with its own predecessor.
    for ((s, p), r) in seeded.iter().zip(first.iter()).zip(second.iter()) {
        let q = predict_step(s, p, common::DT, &noise, 1, &mut rng).unwrap();
        assert_eq!(q[0], *r);
    }
}

// ============================================================================
// Reset and errors
// ============================================================================

#[test]
fn test_advance_without_seed_is_state_error() {
    let mut driver = common::build_driver(5, common::demo_noise(), AnchorMode::Shared, 3);
    let err = driver.step(None).unwrap_err();

    assert_eq!(err, Error::NotSeeded);
    assert!(!err.is_invalid_input());
    assert!(driver.cloud().is_empty());
}

#[test]
fn test_new_observation_reseeds() {
    let mut driver = common::build_driver(5, NoiseParams::zero(), AnchorMode::Shared, 3);
    driver.step(Some(&common::reference_pair())).unwrap();
    driver.step(None).unwrap();
    driver.step(None).unwrap();
    assert_eq!(driver.phase(), DriverPhase::Advancing);

    // Target reverses direction: moving along -x at 4 units/s.
    let pair = ObservationPair::from_columns([1.0, 1.5], [10.0, 8.0], [0.0, 0.0]).unwrap();
    driver.step(Some(&pair)).unwrap();

    assert_eq!(driver.phase(), DriverPhase::Seeded);
    assert_eq!(driver.steps_since_seed(), 0);
    for p in driver.cloud() {
        assert_relative_eq!(p.t, 1.55, epsilon = 1e-12);
        assert_relative_eq!(p.x, 7.8, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_straight_track_reseeding_tracks_target() {
    // Feed each consecutive pair of a track as a fresh observation.
    let track = common::straight_track(20, 0.1, 2.0, -1.0);
    let mut driver = common::build_driver(1, NoiseParams::zero(), AnchorMode::Shared, 2);

    for w in track.windows(2) {
        let pair = ObservationPair::new(w[0], w[1]).unwrap();
        let p = driver.step(Some(&pair)).unwrap()[0];
        assert_relative_eq!(p.x, w[1].x + 2.0 * common::DT, epsilon = 1e-9);
        assert_relative_eq!(p.y, w[1].y - 1.0 * common::DT, epsilon = 1e-9);
    }
}

#[test]
fn test_independent_drivers_across_threads() {
    let handles: Vec<_> = (1..=4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut driver: CloudDriver =
                    common::build_driver(50, common::demo_noise(), AnchorMode::Shared, seed);
                driver.step(Some(&common::reference_pair())).unwrap();
                for _ in 0..3 {
                    driver.step(None).unwrap();
                }
                driver.cloud().clone()
            })
        })
        .collect();

    let clouds: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for cloud in &clouds {
        assert_eq!(cloud.len(), 50);
        assert_relative_eq!(cloud.horizon().unwrap(), 0.50, epsilon = 1e-9);
    }
    assert_ne!(clouds[0], clouds[1]);
}
