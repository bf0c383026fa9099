//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Guidance law selector. Chosen once per engagement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuidanceLawKind {
    /// True proportional navigation: `N * Vc * σ̇` perpendicular to the LOS.
    #[default]
    Tpn,
    /// TPN plus `(N/2) * a_T` to counter a maneuvering target.
    Apn,
    /// Generalized PN: scales with relative speed instead of closing velocity.
    Gpn,
}

/// Spatial dimensionality of an engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Planar,
    Spatial,
}

impl Dimension {
    /// Number of vector components.
    pub fn components(self) -> usize {
        match self {
            Dimension::Planar => 2,
            Dimension::Spatial => 3,
        }
    }
}

impl TryFrom<usize> for Dimension {
    type Error = ConfigError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Dimension::Planar),
            3 => Ok(Dimension::Spatial),
            other => Err(ConfigError::UnsupportedDimension(other)),
        }
    }
}

/// Engagement driver state. `Intercepted` and `TimedOut` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum EngagementState {
    #[default]
    Running,
    Intercepted {
        time: f64,
    },
    TimedOut,
}

impl EngagementState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, EngagementState::Running)
    }

    /// The finalized outcome, or `None` while still running.
    pub fn outcome(self) -> Option<EngagementOutcome> {
        match self {
            EngagementState::Running => None,
            EngagementState::Intercepted { time } => Some(EngagementOutcome::Intercepted { time }),
            EngagementState::TimedOut => Some(EngagementOutcome::TimedOut),
        }
    }
}

/// Result of a finished engagement. Produced exactly once per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EngagementOutcome {
    Intercepted { time: f64 },
    TimedOut,
}

impl EngagementOutcome {
    pub fn is_intercept(self) -> bool {
        matches!(self, EngagementOutcome::Intercepted { .. })
    }

    /// Intercept time in seconds, if the pursuer got there.
    pub fn intercept_time(self) -> Option<f64> {
        match self {
            EngagementOutcome::Intercepted { time } => Some(time),
            EngagementOutcome::TimedOut => None,
        }
    }
}

/// Built-in engagement presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Planar TPN against a constant-velocity target.
    TruePn2d,
    /// Planar APN against a climbing target, 12 g limit.
    AugmentedPn2d,
    /// Spatial APN against a climbing target, 12 g limit.
    AugmentedPn3d,
    /// Spatial GPN against a constant-velocity target.
    GeneralizedPn3d,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 4] = [
        ScenarioId::TruePn2d,
        ScenarioId::AugmentedPn2d,
        ScenarioId::AugmentedPn3d,
        ScenarioId::GeneralizedPn3d,
    ];
}
