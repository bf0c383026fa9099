//! Engagement driver: owns both bodies, the clock and the trajectory log,
//! and steps the pursuit until intercept or timeout.
//!
//! Each tick either terminates (range inside the intercept radius) or runs
//! the full guidance → saturation → integration → record sequence. A tick
//! is never partially applied.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use intercept_core::config::EngagementConfig;
use intercept_core::enums::{EngagementOutcome, EngagementState, GuidanceLawKind};
use intercept_core::error::EngagementError;
use intercept_core::types::{BodyState, SimClock, TrajectoryLog, TrajectorySample};
use intercept_core::vector::Vector;

use crate::guidance::{Geometry, Guidance};
use crate::kinematics;
use crate::saturation;

/// Final outcome plus the frozen trajectory, handed to the trajectory sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementResult<V> {
    pub outcome: EngagementOutcome,
    pub trajectory: TrajectoryLog<V>,
}

/// A single pursuer-vs-target engagement.
#[derive(Debug, Clone)]
pub struct Engagement<V: Vector> {
    config: EngagementConfig,
    guidance: Guidance<V>,
    pursuer: BodyState<V>,
    target: BodyState<V>,
    clock: SimClock,
    state: EngagementState,
    trajectory: TrajectoryLog<V>,
}

impl<V: Vector> Engagement<V> {
    /// Set up an engagement at `t = 0` with the initial sample recorded.
    ///
    /// The target keeps `target.acceleration` for the whole run; the
    /// pursuer's acceleration is replaced by guidance on every tick.
    pub fn new(
        config: EngagementConfig,
        law: GuidanceLawKind,
        pursuer: BodyState<V>,
        target: BodyState<V>,
    ) -> Result<Self, EngagementError> {
        config.validate()?;

        let clock = SimClock::new(config.dt);
        let mut trajectory = TrajectoryLog::new();
        trajectory.record(TrajectorySample {
            time: clock.elapsed(),
            pursuer: pursuer.position,
            target: target.position,
        });

        debug!(
            "engagement start: {law:?} {}D, N={}, dt={}, T_max={}, range={:.1} m",
            V::DIM,
            config.navigation_gain,
            config.dt,
            config.max_time,
            pursuer.range_to(&target),
        );

        Ok(Self {
            config,
            guidance: Guidance::new(law, config.navigation_gain),
            pursuer,
            target,
            clock,
            state: EngagementState::Running,
            trajectory,
        })
    }

    pub fn config(&self) -> &EngagementConfig {
        &self.config
    }

    pub fn law(&self) -> GuidanceLawKind {
        self.guidance.kind()
    }

    pub fn state(&self) -> EngagementState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Current simulation time in seconds.
    pub fn time(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn tick(&self) -> u64 {
        self.clock.tick
    }

    pub fn pursuer(&self) -> &BodyState<V> {
        &self.pursuer
    }

    pub fn target(&self) -> &BodyState<V> {
        &self.target
    }

    pub fn range(&self) -> f64 {
        self.pursuer.range_to(&self.target)
    }

    pub fn trajectory(&self) -> &TrajectoryLog<V> {
        &self.trajectory
    }

    /// Advance one tick and return the resulting state.
    ///
    /// Terminal engagements are left untouched.
    pub fn step(&mut self) -> Result<EngagementState, EngagementError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        // Zero range is covered here as well, since the radius is positive.
        let range = self.range();
        if range < self.config.intercept_radius {
            let time = self.clock.elapsed();
            self.state = EngagementState::Intercepted { time };
            info!("Intercept at time {time:.2} s (range {range:.3} m)");
            return Ok(self.state);
        }

        let geometry = Geometry::between(&self.pursuer, &self.target);
        let command = self.guidance.command(&geometry)?;
        let accel = saturation::limit(command, self.config.max_accel);

        trace!(
            "t={:.2} range={range:.2} vc={:.2} |a_cmd|={:.3} |a|={:.3}",
            self.clock.elapsed(),
            geometry.closing_velocity(),
            command.norm(),
            accel.norm(),
        );

        self.pursuer = kinematics::step(&self.pursuer, accel, self.config.dt);
        self.target = kinematics::coast(&self.target, self.config.dt);
        self.clock.advance();

        self.trajectory.record(TrajectorySample {
            time: self.clock.elapsed(),
            pursuer: self.pursuer.position,
            target: self.target.position,
        });

        if self.clock.elapsed() >= self.config.max_time {
            self.state = EngagementState::TimedOut;
            match self.trajectory.closest_approach() {
                Some(closest) => info!(
                    "Timed out at {:.2} s, closest approach {:.2} m at {:.2} s",
                    self.clock.elapsed(),
                    closest.distance,
                    closest.time,
                ),
                None => info!("Timed out at {:.2} s", self.clock.elapsed()),
            }
        }

        Ok(self.state)
    }

    /// Step until a terminal state and return the outcome with the log.
    pub fn run(mut self) -> Result<EngagementResult<V>, EngagementError> {
        loop {
            if let Some(outcome) = self.step()?.outcome() {
                return Ok(EngagementResult {
                    outcome,
                    trajectory: self.trajectory,
                });
            }
        }
    }

    /// The finished result, or `None` while the engagement is still running.
    pub fn into_result(self) -> Option<EngagementResult<V>> {
        let outcome = self.state.outcome()?;
        Some(EngagementResult {
            outcome,
            trajectory: self.trajectory,
        })
    }
}
