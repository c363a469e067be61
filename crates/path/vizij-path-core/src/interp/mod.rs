//! Value interpolation law and helpers.
//!
//! [`Interpolatable`] is the per-value linear law used by the per-vertex
//! path of the batch interpolator; [`functions::lerp_flat`] is its bulk
//! counterpart over packed f64 buffers.

pub mod functions;

use crate::point::Vec2;
use crate::vertex::CurveVertex;

pub use functions::{lerp_f64, lerp_flat, lerp_vec2};

/// Linear interpolation between two values of the same type.
///
/// `amount == 0` yields `self`, `amount == 1` yields `to`. Values outside
/// `[0, 1]` extrapolate; callers own any clamping.
pub trait Interpolatable: Sized {
    fn interpolate(&self, to: &Self, amount: f64) -> Self;
}

impl Interpolatable for f64 {
    #[inline]
    fn interpolate(&self, to: &Self, amount: f64) -> Self {
        lerp_f64(*self, *to, amount)
    }
}

impl Interpolatable for Vec2 {
    #[inline]
    fn interpolate(&self, to: &Self, amount: f64) -> Self {
        lerp_vec2(*self, *to, amount)
    }
}

impl Interpolatable for CurveVertex {
    #[inline]
    fn interpolate(&self, to: &Self, amount: f64) -> Self {
        CurveVertex::interpolate(self, to, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_extrapolates() {
        assert_eq!(0.0f64.interpolate(&1.0, 2.0), 2.0);
        assert_eq!(0.0f64.interpolate(&1.0, -1.0), -1.0);
    }

    #[test]
    fn vec2_midpoint() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(a.interpolate(&b, 0.5), Vec2::new(5.0, 5.0));
    }
}
