//! Regression baselines for the presets and a fixed set of engagements.
//!
//! Intercept times are pinned to ±2 ticks of the recorded baseline.

use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use test_log::test;

use intercept_sim::core::config::EngagementConfig;
use intercept_sim::core::constants::DEFAULT_MAX_G;
use intercept_sim::core::enums::{EngagementOutcome, GuidanceLawKind, ScenarioId};
use intercept_sim::core::types::BodyState;
use intercept_sim::scenario::build_request;
use intercept_sim::{simulate, Engagement, EngagementResult};

const TIME_TOLERANCE: f64 = 0.025;

fn config() -> EngagementConfig {
    EngagementConfig::default()
        .with_intercept_radius(10.0)
        .with_g_limit(DEFAULT_MAX_G)
}

fn run_planar(
    law: GuidanceLawKind,
    config: EngagementConfig,
    target_velocity: DVec2,
    target_accel: DVec2,
) -> EngagementResult<DVec2> {
    let pursuer = BodyState::new(DVec2::new(0.0, 0.0), DVec2::new(0.0, 300.0));
    let target = BodyState::new(DVec2::new(5_000.0, 10_000.0), target_velocity)
        .with_acceleration(target_accel);
    Engagement::new(config, law, pursuer, target)
        .unwrap()
        .run()
        .unwrap()
}

fn run_spatial(law: GuidanceLawKind, target_accel: DVec3) -> EngagementResult<DVec3> {
    let pursuer = BodyState::new(DVec3::new(0.0, 0.0, 0.0), DVec3::new(0.0, 300.0, 0.0));
    let target = BodyState::new(
        DVec3::new(5_000.0, 10_000.0, 2_000.0),
        DVec3::new(-100.0, 0.0, 0.0),
    )
    .with_acceleration(target_accel);
    Engagement::new(config(), law, pursuer, target)
        .unwrap()
        .run()
        .unwrap()
}

fn assert_intercept_near(outcome: EngagementOutcome, expected: f64) {
    let time = outcome
        .intercept_time()
        .unwrap_or_else(|| panic!("expected intercept near {expected:.2} s, got {outcome:?}"));
    assert!(
        (time - expected).abs() <= TIME_TOLERANCE,
        "intercept at {time:.2} s, baseline {expected:.2} s"
    );
}

// ---- Presets ----

#[test]
fn test_true_pn_preset_never_closes() {
    // Both bodies fly +x with the pursuer directly above: the closing
    // velocity starts at zero and goes negative, so TPN never turns in.
    let report = simulate(&build_request(ScenarioId::TruePn2d)).unwrap();
    assert_eq!(report.outcome(), EngagementOutcome::TimedOut);
    assert_eq!(report.sample_count(), 10_001);

    let closest = report.closest_approach().unwrap();
    assert_eq!(closest.time, 0.0);
    assert_eq!(closest.distance, 10_000.0);
}

#[test]
fn test_augmented_presets_time_out_opening() {
    for id in [ScenarioId::AugmentedPn2d, ScenarioId::AugmentedPn3d] {
        let report = simulate(&build_request(id)).unwrap();
        assert_eq!(report.outcome(), EngagementOutcome::TimedOut, "{id:?}");
        assert_eq!(report.sample_count(), 10_001);
        assert_eq!(report.closest_approach().unwrap().time, 0.0);
    }
}

#[test]
fn test_generalized_pn_preset_closes_but_times_out() {
    // GPN does not depend on the closing-velocity sign and starts closing
    // from the same geometry, but runs out of time still ~2 km short.
    let report = simulate(&build_request(ScenarioId::GeneralizedPn3d)).unwrap();
    assert_eq!(report.outcome(), EngagementOutcome::TimedOut);

    let closest = report.closest_approach().unwrap();
    assert_eq!(closest.time, 100.0);
    assert_relative_eq!(closest.distance, 2_140.05, epsilon = 0.5);
}

// ---- Planar baselines ----

#[test]
fn test_true_pn_crossing_target() {
    let result = run_planar(
        GuidanceLawKind::Tpn,
        config(),
        DVec2::new(-100.0, 0.0),
        DVec2::ZERO,
    );
    assert_intercept_near(result.outcome, 35.79);
    assert!(result.trajectory.len() >= 3578 && result.trajectory.len() <= 3582);
}

#[test]
fn test_stationary_target_faster_than_receding_target() {
    let stationary = run_planar(GuidanceLawKind::Tpn, config(), DVec2::ZERO, DVec2::ZERO);
    let receding = run_planar(
        GuidanceLawKind::Tpn,
        config(),
        DVec2::new(100.0, 0.0),
        DVec2::ZERO,
    );
    assert_intercept_near(stationary.outcome, 43.21);
    assert_intercept_near(receding.outcome, 59.33);
    assert!(
        stationary.outcome.intercept_time().unwrap()
            < receding.outcome.intercept_time().unwrap()
    );
}

#[test]
fn test_augmentation_defeats_climbing_target() {
    let climb = DVec2::new(0.0, 10.0);
    let tpn = run_planar(GuidanceLawKind::Tpn, config(), DVec2::new(-100.0, 0.0), climb);
    let apn = run_planar(GuidanceLawKind::Apn, config(), DVec2::new(-100.0, 0.0), climb);

    assert_eq!(tpn.outcome, EngagementOutcome::TimedOut);
    assert_intercept_near(apn.outcome, 26.26);
}

#[test]
fn test_generalized_pn_crossing_target() {
    let result = run_planar(
        GuidanceLawKind::Gpn,
        config(),
        DVec2::new(-100.0, 0.0),
        DVec2::ZERO,
    );
    assert_intercept_near(result.outcome, 35.38);
}

#[test]
fn test_saturated_pursuer_flies_past() {
    let result = run_planar(
        GuidanceLawKind::Tpn,
        config().with_max_accel(1e-6),
        DVec2::new(-100.0, 0.0),
        DVec2::ZERO,
    );
    assert_eq!(result.outcome, EngagementOutcome::TimedOut);

    let closest = result.trajectory.closest_approach().unwrap();
    assert_relative_eq!(closest.time, 35.0, epsilon = 0.02);
    assert_relative_eq!(closest.distance, 1_581.14, epsilon = 1.0);
}

// ---- Spatial baselines ----

#[test]
fn test_spatial_laws_against_constant_velocity_target() {
    assert_intercept_near(run_spatial(GuidanceLawKind::Tpn, DVec3::ZERO).outcome, 37.11);
    assert_intercept_near(run_spatial(GuidanceLawKind::Apn, DVec3::ZERO).outcome, 37.11);
    assert_intercept_near(run_spatial(GuidanceLawKind::Gpn, DVec3::ZERO).outcome, 36.02);
}

#[test]
fn test_spatial_laws_against_maneuvering_target() {
    let climb = DVec3::new(0.0, 10.0, 0.0);
    assert_eq!(
        run_spatial(GuidanceLawKind::Tpn, climb).outcome,
        EngagementOutcome::TimedOut
    );
    assert_intercept_near(run_spatial(GuidanceLawKind::Apn, climb).outcome, 27.07);
    assert_eq!(
        run_spatial(GuidanceLawKind::Gpn, climb).outcome,
        EngagementOutcome::TimedOut
    );

    let lift = DVec3::new(0.0, 0.0, 5.0);
    assert_intercept_near(run_spatial(GuidanceLawKind::Tpn, lift).outcome, 41.40);
    assert_intercept_near(run_spatial(GuidanceLawKind::Apn, lift).outcome, 35.33);
    assert_intercept_near(run_spatial(GuidanceLawKind::Gpn, lift).outcome, 37.41);
}
