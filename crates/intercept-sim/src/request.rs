//! Runtime-dimension boundary for callers that pick 2D or 3D from data.
//!
//! An [`EngagementRequest`] carries plain component lists; [`simulate`]
//! checks them against the requested dimensionality and dispatches to the
//! matching typed engine.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use intercept_core::config::EngagementConfig;
use intercept_core::enums::{Dimension, EngagementOutcome, GuidanceLawKind};
use intercept_core::error::{ConfigError, EngagementError};
use intercept_core::types::{BodyState, ClosestApproach};
use intercept_core::vector::Vector;

use crate::engagement::{Engagement, EngagementResult};

/// Initial kinematic state of one body, as component lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyInit {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    /// Constant acceleration. Empty means zero. Ignored for the pursuer.
    #[serde(default)]
    pub acceleration: Vec<f64>,
}

impl BodyInit {
    pub fn new(position: &[f64], velocity: &[f64]) -> Self {
        Self {
            position: position.to_vec(),
            velocity: velocity.to_vec(),
            acceleration: Vec::new(),
        }
    }

    pub fn with_acceleration(mut self, acceleration: &[f64]) -> Self {
        self.acceleration = acceleration.to_vec();
        self
    }

    fn to_state<V: Vector>(&self, body: &str) -> Result<BodyState<V>, ConfigError> {
        let position = components::<V>(&self.position, body, "position")?;
        let velocity = components::<V>(&self.velocity, body, "velocity")?;
        let acceleration = if self.acceleration.is_empty() {
            V::ZERO
        } else {
            components::<V>(&self.acceleration, body, "acceleration")?
        };
        Ok(BodyState::new(position, velocity).with_acceleration(acceleration))
    }
}

/// Everything needed to run one engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementRequest {
    /// Number of spatial dimensions (2 or 3).
    pub dimension: usize,
    pub law: GuidanceLawKind,
    #[serde(default)]
    pub config: EngagementConfig,
    pub pursuer: BodyInit,
    pub target: BodyInit,
}

/// Typed result of a [`simulate`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngagementReport {
    Planar(EngagementResult<DVec2>),
    Spatial(EngagementResult<DVec3>),
}

impl EngagementReport {
    pub fn outcome(&self) -> EngagementOutcome {
        match self {
            EngagementReport::Planar(r) => r.outcome,
            EngagementReport::Spatial(r) => r.outcome,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            EngagementReport::Planar(_) => Dimension::Planar,
            EngagementReport::Spatial(_) => Dimension::Spatial,
        }
    }

    /// Number of recorded samples, including the initial state.
    pub fn sample_count(&self) -> usize {
        match self {
            EngagementReport::Planar(r) => r.trajectory.len(),
            EngagementReport::Spatial(r) => r.trajectory.len(),
        }
    }

    pub fn closest_approach(&self) -> Option<ClosestApproach> {
        match self {
            EngagementReport::Planar(r) => r.trajectory.closest_approach(),
            EngagementReport::Spatial(r) => r.trajectory.closest_approach(),
        }
    }
}

/// Validate a request and run it to completion.
pub fn simulate(request: &EngagementRequest) -> Result<EngagementReport, EngagementError> {
    match Dimension::try_from(request.dimension)? {
        Dimension::Planar => run_typed::<DVec2>(request).map(EngagementReport::Planar),
        Dimension::Spatial => run_typed::<DVec3>(request).map(EngagementReport::Spatial),
    }
}

fn run_typed<V: Vector>(
    request: &EngagementRequest,
) -> Result<EngagementResult<V>, EngagementError> {
    let pursuer = request.pursuer.to_state::<V>("pursuer")?;
    let target = request.target.to_state::<V>("target")?;
    Engagement::new(request.config, request.law, pursuer, target)?.run()
}

fn components<V: Vector>(values: &[f64], body: &str, quantity: &str) -> Result<V, ConfigError> {
    V::from_components(values).ok_or_else(|| ConfigError::ComponentCount {
        field: format!("{body} {quantity}"),
        expected: V::DIM,
        found: values.len(),
    })
}
