//! Fundamental kinematic and simulation types.

use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// Kinematic state of one body (meters, m/s, m/s²).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyState<V> {
    pub position: V,
    pub velocity: V,
    /// Fixed for the target; recomputed every tick for the pursuer.
    pub acceleration: V,
}

impl<V: Vector> BodyState<V> {
    /// Unaccelerated body.
    pub fn new(position: V, velocity: V) -> Self {
        Self {
            position,
            velocity,
            acceleration: V::ZERO,
        }
    }

    pub fn with_acceleration(mut self, acceleration: V) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Straight-line distance to another body.
    pub fn range_to(&self, other: &BodyState<V>) -> f64 {
        (other.position - self.position).norm()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

/// One recorded tick: time plus both body positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample<V> {
    pub time: f64,
    pub pursuer: V,
    pub target: V,
}

impl<V: Vector> TrajectorySample<V> {
    pub fn range(&self) -> f64 {
        (self.target - self.pursuer).norm()
    }
}

/// Point of minimum pursuer–target separation in a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosestApproach {
    pub time: f64,
    pub distance: f64,
}

/// Append-only record of an engagement, one sample per tick including the
/// initial state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryLog<V> {
    samples: Vec<TrajectorySample<V>>,
}

impl<V: Vector> TrajectoryLog<V> {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Append a sample. Samples are never removed or rewritten.
    pub fn record(&mut self, sample: TrajectorySample<V>) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[TrajectorySample<V>] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectorySample<V>> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrajectorySample<V>> {
        self.samples.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrajectorySample<V>> {
        self.samples.iter()
    }

    /// Pursuer positions in order, for plotting.
    pub fn pursuer_path(&self) -> impl Iterator<Item = V> + '_ {
        self.samples.iter().map(|s| s.pursuer)
    }

    /// Target positions in order, for plotting.
    pub fn target_path(&self) -> impl Iterator<Item = V> + '_ {
        self.samples.iter().map(|s| s.target)
    }

    /// Earliest sample with the smallest separation.
    pub fn closest_approach(&self) -> Option<ClosestApproach> {
        self.samples
            .iter()
            .map(|s| ClosestApproach {
                time: s.time,
                distance: s.range(),
            })
            .fold(None, |best, candidate| match best {
                Some(b) if b.distance <= candidate.distance => Some(b),
                _ => Some(candidate),
            })
    }

    pub fn into_samples(self) -> Vec<TrajectorySample<V>> {
        self.samples
    }
}

/// Simulation time tracking.
///
/// Elapsed time is derived from the tick count, so it never drifts from
/// `tick * dt` through repeated float addition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Seconds per tick.
    pub dt: f64,
}

impl SimClock {
    pub fn new(dt: f64) -> Self {
        Self { tick: 0, dt }
    }

    /// Elapsed simulation time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.tick as f64 * self.dt
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
