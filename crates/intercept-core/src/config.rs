//! Engagement configuration: the immutable parameter block for one run.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Scalar parameters of an engagement.
///
/// Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    /// Navigation gain `N` (dimensionless, typically 3–5).
    pub navigation_gain: f64,
    /// Integration time step (seconds).
    pub dt: f64,
    /// Simulation horizon (seconds).
    pub max_time: f64,
    /// Range below which the target counts as intercepted (meters).
    pub intercept_radius: f64,
    /// Pursuer acceleration limit (m/s²). `None` is unbounded.
    pub max_accel: Option<f64>,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            navigation_gain: DEFAULT_NAVIGATION_GAIN,
            dt: DEFAULT_DT,
            max_time: DEFAULT_MAX_TIME,
            intercept_radius: DEFAULT_INTERCEPT_RADIUS,
            max_accel: None,
        }
    }
}

impl EngagementConfig {
    pub fn with_navigation_gain(mut self, gain: f64) -> Self {
        self.navigation_gain = gain;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_max_time(mut self, max_time: f64) -> Self {
        self.max_time = max_time;
        self
    }

    pub fn with_intercept_radius(mut self, radius: f64) -> Self {
        self.intercept_radius = radius;
        self
    }

    pub fn with_max_accel(mut self, max_accel: f64) -> Self {
        self.max_accel = Some(max_accel);
        self
    }

    /// Limit acceleration to a G-load (`g_load * 9.81` m/s²).
    pub fn with_g_limit(self, g_load: f64) -> Self {
        self.with_max_accel(g_load * STANDARD_GRAVITY)
    }

    pub fn unbounded(mut self) -> Self {
        self.max_accel = None;
        self
    }

    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngagementConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parameter invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(ConfigError::NonPositiveTimeStep(self.dt));
        }
        if !(self.intercept_radius > 0.0 && self.intercept_radius.is_finite()) {
            return Err(ConfigError::NonPositiveInterceptRadius(self.intercept_radius));
        }
        if !(self.max_time >= 0.0 && self.max_time.is_finite()) {
            return Err(ConfigError::InvalidMaxTime(self.max_time));
        }
        if !self.navigation_gain.is_finite() {
            return Err(ConfigError::NonFiniteGain(self.navigation_gain));
        }
        if let Some(max_accel) = self.max_accel {
            if !(max_accel > 0.0 && max_accel.is_finite()) {
                return Err(ConfigError::NonPositiveMaxAccel(max_accel));
            }
        }
        Ok(())
    }
}
