//! Kinematic integration.
//!
//! Semi-implicit Euler at a fixed step: velocity first, then position from
//! the updated velocity. No adaptive refinement; accuracy is the caller's
//! choice of `dt`.

use intercept_core::types::BodyState;
use intercept_core::vector::Vector;

/// Advance a body one step under `acceleration`.
///
/// The returned state records the acceleration that was applied.
pub fn step<V: Vector>(state: &BodyState<V>, acceleration: V, dt: f64) -> BodyState<V> {
    let velocity = state.velocity + acceleration * dt;
    let position = state.position + velocity * dt;
    BodyState {
        position,
        velocity,
        acceleration,
    }
}

/// Advance a body one step under its own fixed acceleration.
pub fn coast<V: Vector>(state: &BodyState<V>, dt: f64) -> BodyState<V> {
    step(state, state.acceleration, dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{DVec2, DVec3};

    #[test]
    fn test_velocity_updates_before_position() {
        let body = BodyState::new(DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
        let next = step(&body, DVec2::new(0.0, 2.0), 0.5);
        assert_eq!(next.velocity, DVec2::new(10.0, 1.0));
        // Position uses the new velocity: (10, 1) * 0.5
        assert_eq!(next.position, DVec2::new(5.0, 0.5));
        assert_eq!(next.acceleration, DVec2::new(0.0, 2.0));
    }

    #[test]
    fn test_constant_velocity_coast() {
        let mut body =
            BodyState::new(DVec3::new(0.0, 10_000.0, 0.0), DVec3::new(100.0, 0.0, 0.0));
        for _ in 0..100 {
            body = coast(&body, 0.01);
        }
        assert_relative_eq!(body.position.x, 100.0, epsilon = 1e-9);
        assert_eq!(body.position.y, 10_000.0);
        assert_eq!(body.velocity, DVec3::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn test_constant_acceleration_coast() {
        // Semi-implicit Euler: x_n = a * dt² * n(n+1)/2 from rest.
        let mut body =
            BodyState::new(DVec2::ZERO, DVec2::ZERO).with_acceleration(DVec2::new(0.0, 10.0));
        let dt = 0.1;
        for _ in 0..10 {
            body = coast(&body, dt);
        }
        assert_relative_eq!(body.velocity.y, 10.0, epsilon = 1e-9);
        assert_relative_eq!(body.position.y, 10.0 * dt * dt * 55.0, epsilon = 1e-9);
        assert_eq!(body.acceleration, DVec2::new(0.0, 10.0));
    }
}
