//! Guidance-and-integration engine for pursuer/target intercepts.
//!
//! Runs one engagement at a fixed time step: guidance law, acceleration
//! saturation, semi-implicit Euler integration, and intercept/timeout
//! termination. Fully deterministic and headless.

pub mod engagement;
pub mod guidance;
pub mod kinematics;
pub mod request;
pub mod saturation;
pub mod scenario;

pub use engagement::{Engagement, EngagementResult};
pub use intercept_core as core;
pub use request::{simulate, EngagementReport, EngagementRequest};
