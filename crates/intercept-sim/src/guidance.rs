//! Proportional-navigation guidance laws.
//!
//! All three laws share the same line-of-sight preamble: with relative
//! position `r = r_T - r_M` and relative velocity `v = v_T - v_M`, the LOS
//! rate is `σ̇ = (r × v) / |r|²` and the closing velocity is `-(r · v) / |r|`.
//!
//! The LOS rate grows without bound as the range shrinks toward zero. That
//! is inherent to LOS-rate guidance; the engagement driver stops at the
//! intercept radius before it matters, and no epsilon is added here.

use intercept_core::config::EngagementConfig;
use intercept_core::enums::GuidanceLawKind;
use intercept_core::error::EngagementError;
use intercept_core::types::BodyState;
use intercept_core::vector::Vector;

/// Relative engagement geometry as seen from the pursuer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry<V> {
    /// Target position minus pursuer position.
    pub relative_position: V,
    /// Target velocity minus pursuer velocity.
    pub relative_velocity: V,
    /// Target's own acceleration (zero for a non-maneuvering target).
    pub target_acceleration: V,
}

impl<V: Vector> Geometry<V> {
    pub fn between(pursuer: &BodyState<V>, target: &BodyState<V>) -> Self {
        Self {
            relative_position: target.position - pursuer.position,
            relative_velocity: target.velocity - pursuer.velocity,
            target_acceleration: target.acceleration,
        }
    }

    pub fn range(&self) -> f64 {
        self.relative_position.norm()
    }

    /// LOS angular rate `(r × v) / R²`. Undefined at zero range.
    pub fn los_rate(&self) -> V::Rate {
        let range = self.range();
        self.relative_position.cross(self.relative_velocity) / (range * range)
    }

    /// Rate of range decrease (positive when closing). Undefined at zero range.
    pub fn closing_velocity(&self) -> f64 {
        -self.relative_position.dot(self.relative_velocity) / self.range()
    }
}

/// Signature shared by every guidance law.
pub type CommandFn<V> = fn(&Geometry<V>, f64) -> Result<V, EngagementError>;

/// A guidance law bound to its navigation gain.
///
/// The law is resolved to a function once at construction, so the
/// per-tick call does not branch on the law kind.
#[derive(Clone, Copy)]
pub struct Guidance<V: Vector> {
    kind: GuidanceLawKind,
    navigation_gain: f64,
    command_fn: CommandFn<V>,
}

impl<V: Vector> std::fmt::Debug for Guidance<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guidance")
            .field("kind", &self.kind)
            .field("navigation_gain", &self.navigation_gain)
            .finish()
    }
}

impl<V: Vector> Guidance<V> {
    pub fn new(kind: GuidanceLawKind, navigation_gain: f64) -> Self {
        let command_fn: CommandFn<V> = match kind {
            GuidanceLawKind::Tpn => true_pn,
            GuidanceLawKind::Apn => augmented_pn,
            GuidanceLawKind::Gpn => generalized_pn,
        };
        Self {
            kind,
            navigation_gain,
            command_fn,
        }
    }

    pub fn kind(&self) -> GuidanceLawKind {
        self.kind
    }

    pub fn navigation_gain(&self) -> f64 {
        self.navigation_gain
    }

    /// Raw (unsaturated) pursuer acceleration command.
    pub fn command(&self, geometry: &Geometry<V>) -> Result<V, EngagementError> {
        (self.command_fn)(geometry, self.navigation_gain)
    }
}

/// Compute a commanded pursuer acceleration for one geometry.
///
/// Fails with [`EngagementError::DegenerateVector`] at zero range, where the
/// line of sight is undefined.
pub fn compute_command<V: Vector>(
    kind: GuidanceLawKind,
    geometry: &Geometry<V>,
    config: &EngagementConfig,
) -> Result<V, EngagementError> {
    Guidance::new(kind, config.navigation_gain).command(geometry)
}

/// True Proportional Navigation: `a = N * Vc * (σ̇ × e_LOS)`.
///
/// Pure geometry feedback; the target's acceleration is ignored.
pub fn true_pn<V: Vector>(geometry: &Geometry<V>, gain: f64) -> Result<V, EngagementError> {
    let los = geometry.relative_position.normalize()?;
    let los_rate = geometry.los_rate();
    let closing_velocity = geometry.closing_velocity();
    Ok(V::rate_cross(los_rate, los) * (gain * closing_velocity))
}

/// Augmented Proportional Navigation: TPN plus `(N/2) * a_T`.
pub fn augmented_pn<V: Vector>(geometry: &Geometry<V>, gain: f64) -> Result<V, EngagementError> {
    let tpn = true_pn(geometry, gain)?;
    Ok(tpn + geometry.target_acceleration * (gain / 2.0))
}

/// Generalized Proportional Navigation: `a = N * |v| * (e_v × σ̇)`.
///
/// Uses relative speed instead of closing velocity, so it stays well
/// behaved in receding geometry. Zero relative velocity commands nothing.
pub fn generalized_pn<V: Vector>(geometry: &Geometry<V>, gain: f64) -> Result<V, EngagementError> {
    if geometry.range() == 0.0 {
        return Err(EngagementError::DegenerateVector);
    }
    let relative_speed = geometry.relative_velocity.norm();
    if relative_speed == 0.0 {
        return Ok(V::ZERO);
    }
    let velocity_dir = geometry.relative_velocity.normalize()?;
    Ok(velocity_dir.cross_rate(geometry.los_rate()) * (gain * relative_speed))
}
