//! Simulation constants and default tuning parameters.

// --- Engagement defaults ---

/// Default navigation constant (dimensionless).
pub const DEFAULT_NAVIGATION_GAIN: f64 = 4.0;

/// Default integration time step (seconds).
pub const DEFAULT_DT: f64 = 0.01;

/// Default simulation horizon (seconds).
pub const DEFAULT_MAX_TIME: f64 = 100.0;

/// Default intercept distance threshold (meters).
pub const DEFAULT_INTERCEPT_RADIUS: f64 = 1.0;

// --- Physical constants ---

/// Standard gravity (m/s²).
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Default pursuer G-load limit used by the augmented presets.
pub const DEFAULT_MAX_G: f64 = 12.0;

// --- Preset initial conditions ---

/// Pursuer launch altitude above the target track (meters).
pub const PRESET_PURSUER_ALTITUDE: f64 = 10_000.0;

/// Pursuer initial speed along +x (m/s).
pub const PRESET_PURSUER_SPEED: f64 = 200.0;

/// Target initial speed along +x (m/s).
pub const PRESET_TARGET_SPEED: f64 = 100.0;

/// Upward target maneuver used by the augmented presets (m/s²).
pub const PRESET_TARGET_CLIMB_ACCEL: f64 = 10.0;
