//! Acceleration saturation: clip a command to the pursuer's physical limit.

use intercept_core::vector::Vector;

/// Relative slack above the limit that counts as already saturated.
///
/// A rescaled vector's recomputed norm can land a few ulps above the limit;
/// without this slack a second pass would rescale it again.
const LIMIT_TOLERANCE: f64 = 8.0 * f64::EPSILON;

/// Clip `accel` to at most `max_accel` magnitude, preserving direction.
///
/// `None` is unbounded. Idempotent: limiting an already limited vector
/// returns it unchanged.
pub fn limit<V: Vector>(accel: V, max_accel: Option<f64>) -> V {
    let Some(max_accel) = max_accel else {
        return accel;
    };
    let magnitude = accel.norm();
    if magnitude > max_accel * (1.0 + LIMIT_TOLERANCE) {
        accel * (max_accel / magnitude)
    } else {
        accel
    }
}

/// Whether `limit` would change `accel`.
pub fn is_saturated<V: Vector>(accel: V, max_accel: Option<f64>) -> bool {
    limit(accel, max_accel) != accel
}
