//! Scenario presets — the reference engagements with fixed initial conditions.
//!
//! Every preset starts the pursuer 10 km above the target, both flying
//! along +x, the pursuer at twice the target's speed.

use intercept_core::config::EngagementConfig;
use intercept_core::constants::*;
use intercept_core::enums::{GuidanceLawKind, ScenarioId};

use crate::request::{BodyInit, EngagementRequest};

/// Build the engagement request for a given preset.
pub fn build_request(scenario: ScenarioId) -> EngagementRequest {
    match scenario {
        ScenarioId::TruePn2d => build_true_pn_2d(),
        ScenarioId::AugmentedPn2d => build_augmented_pn_2d(),
        ScenarioId::AugmentedPn3d => build_augmented_pn_3d(),
        ScenarioId::GeneralizedPn3d => build_generalized_pn_3d(),
    }
}

/// Planar TPN, constant-velocity target, no acceleration limit.
fn build_true_pn_2d() -> EngagementRequest {
    EngagementRequest {
        dimension: 2,
        law: GuidanceLawKind::Tpn,
        config: EngagementConfig::default(),
        pursuer: BodyInit::new(
            &[0.0, PRESET_PURSUER_ALTITUDE],
            &[PRESET_PURSUER_SPEED, 0.0],
        ),
        target: BodyInit::new(&[0.0, 0.0], &[PRESET_TARGET_SPEED, 0.0]),
    }
}

/// Planar APN, target climbing at 10 m/s², 12 g pursuer limit.
fn build_augmented_pn_2d() -> EngagementRequest {
    EngagementRequest {
        dimension: 2,
        law: GuidanceLawKind::Apn,
        config: EngagementConfig::default().with_g_limit(DEFAULT_MAX_G),
        pursuer: BodyInit::new(
            &[0.0, PRESET_PURSUER_ALTITUDE],
            &[PRESET_PURSUER_SPEED, 0.0],
        ),
        target: BodyInit::new(&[0.0, 0.0], &[PRESET_TARGET_SPEED, 0.0])
            .with_acceleration(&[0.0, PRESET_TARGET_CLIMB_ACCEL]),
    }
}

/// Spatial APN, same geometry as the planar case in the z = 0 plane.
fn build_augmented_pn_3d() -> EngagementRequest {
    EngagementRequest {
        dimension: 3,
        law: GuidanceLawKind::Apn,
        config: EngagementConfig::default().with_g_limit(DEFAULT_MAX_G),
        pursuer: BodyInit::new(
            &[0.0, PRESET_PURSUER_ALTITUDE, 0.0],
            &[PRESET_PURSUER_SPEED, 0.0, 0.0],
        ),
        target: BodyInit::new(&[0.0, 0.0, 0.0], &[PRESET_TARGET_SPEED, 0.0, 0.0])
            .with_acceleration(&[0.0, PRESET_TARGET_CLIMB_ACCEL, 0.0]),
    }
}

/// Spatial GPN, constant-velocity target, no acceleration limit.
fn build_generalized_pn_3d() -> EngagementRequest {
    EngagementRequest {
        dimension: 3,
        law: GuidanceLawKind::Gpn,
        config: EngagementConfig::default(),
        pursuer: BodyInit::new(
            &[0.0, PRESET_PURSUER_ALTITUDE, 0.0],
            &[PRESET_PURSUER_SPEED, 0.0, 0.0],
        ),
        target: BodyInit::new(&[0.0, 0.0, 0.0], &[PRESET_TARGET_SPEED, 0.0, 0.0]),
    }
}
