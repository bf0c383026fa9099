//! Dimension-agnostic vector kernel over `glam` f64 vectors.
//!
//! The planar pseudo-cross (a scalar) and the spatial vector cross are two
//! implementations of one `cross` capability; the associated `Rate` type is
//! what a cross product yields and what an angular rate is expressed as.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, DVec3};

use crate::error::EngagementError;

/// Vector arithmetic needed by the guidance and integration code.
///
/// All operations are pure; vectors are `Copy` values.
pub trait Vector:
    Copy
    + Debug
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Cross-product / angular-rate type: `f64` in 2D, `DVec3` in 3D.
    type Rate: Copy + Debug + PartialEq + Div<f64, Output = Self::Rate>;

    /// Number of components.
    const DIM: usize;

    const ZERO: Self;

    fn dot(self, other: Self) -> f64;

    /// 2D: `a.x * b.y - a.y * b.x`. 3D: the standard cross product.
    fn cross(self, other: Self) -> Self::Rate;

    /// `ω × v` for an angular rate `ω`.
    fn rate_cross(rate: Self::Rate, v: Self) -> Self;

    /// Build from a component slice. `None` when the length is not `DIM`.
    fn from_components(components: &[f64]) -> Option<Self>;

    fn components(self) -> Vec<f64>;

    /// Euclidean length.
    fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Fails on the zero vector rather than producing NaNs.
    fn normalize(self) -> Result<Self, EngagementError> {
        let n = self.norm();
        if n == 0.0 {
            return Err(EngagementError::DegenerateVector);
        }
        Ok(self / n)
    }

    fn scale(self, s: f64) -> Self {
        self * s
    }

    /// `v × ω`, the reverse-order counterpart of [`Vector::rate_cross`].
    fn cross_rate(self, rate: Self::Rate) -> Self {
        -Self::rate_cross(rate, self)
    }
}

/// Rotate a planar vector by +90°.
pub fn perpendicular_ccw(v: DVec2) -> DVec2 {
    v.perp()
}

impl Vector for DVec2 {
    type Rate = f64;

    const DIM: usize = 2;
    const ZERO: Self = DVec2::ZERO;

    fn dot(self, other: Self) -> f64 {
        DVec2::dot(self, other)
    }

    fn cross(self, other: Self) -> f64 {
        self.perp_dot(other)
    }

    fn rate_cross(rate: f64, v: Self) -> Self {
        // ω is along +z, so ω × v is v rotated ccw and scaled by ω.
        perpendicular_ccw(v) * rate
    }

    fn from_components(components: &[f64]) -> Option<Self> {
        match components {
            [x, y] => Some(DVec2::new(*x, *y)),
            _ => None,
        }
    }

    fn components(self) -> Vec<f64> {
        self.to_array().to_vec()
    }
}

impl Vector for DVec3 {
    type Rate = DVec3;

    const DIM: usize = 3;
    const ZERO: Self = DVec3::ZERO;

    fn dot(self, other: Self) -> f64 {
        DVec3::dot(self, other)
    }

    fn cross(self, other: Self) -> DVec3 {
        DVec3::cross(self, other)
    }

    fn rate_cross(rate: DVec3, v: Self) -> Self {
        DVec3::cross(rate, v)
    }

    fn from_components(components: &[f64]) -> Option<Self> {
        match components {
            [x, y, z] => Some(DVec3::new(*x, *y, *z)),
            _ => None,
        }
    }

    fn components(self) -> Vec<f64> {
        self.to_array().to_vec()
    }
}
