//! Error types for engagement construction and execution.

use thiserror::Error;

/// Rejected engagement inputs. Detected before the first tick.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("time step must be positive and finite, got {0}")]
    NonPositiveTimeStep(f64),
    #[error("intercept radius must be positive and finite, got {0}")]
    NonPositiveInterceptRadius(f64),
    #[error("maximum acceleration must be positive and finite, got {0}")]
    NonPositiveMaxAccel(f64),
    #[error("maximum simulation time must be non-negative and finite, got {0}")]
    InvalidMaxTime(f64),
    #[error("navigation gain must be finite, got {0}")]
    NonFiniteGain(f64),
    #[error("unsupported dimensionality {0}, expected 2 or 3")]
    UnsupportedDimension(usize),
    #[error("{field} has {found} components, expected {expected}")]
    ComponentCount {
        field: String,
        expected: usize,
        found: usize,
    },
    #[error("malformed engagement config: {0}")]
    Parse(String),
}

/// Fatal engagement errors. A run never recovers from one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngagementError {
    #[error("invalid engagement config: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
}
