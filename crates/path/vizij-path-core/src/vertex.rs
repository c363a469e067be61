//! Curve vertex: a path point plus its two bezier control points.

use serde::{Deserialize, Serialize};

use crate::interp::functions::{cubic_point, lerp_vec2};
use crate::point::Vec2;

/// Geometric value of one path vertex.
///
/// Tangents are stored as absolute positions. The struct is three packed
/// [`Vec2`]s, i.e. six `f64`s with no padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CurveVertex {
    pub point: Vec2,
    #[serde(rename = "in")]
    pub in_tangent: Vec2,
    #[serde(rename = "out")]
    pub out_tangent: Vec2,
}

unsafe impl bytemuck::Zeroable for CurveVertex {}
unsafe impl bytemuck::Pod for CurveVertex {}

impl CurveVertex {
    pub const fn new(point: Vec2, in_tangent: Vec2, out_tangent: Vec2) -> Self {
        Self {
            point,
            in_tangent,
            out_tangent,
        }
    }

    /// Build from tangents expressed relative to `point`.
    pub fn from_relative(point: Vec2, in_relative: Vec2, out_relative: Vec2) -> Self {
        Self::new(point, point + in_relative, point + out_relative)
    }

    /// Sharp corner: both control points sit on the vertex.
    pub const fn corner(point: Vec2) -> Self {
        Self::new(point, point, point)
    }

    #[inline]
    pub fn in_tangent_relative(&self) -> Vec2 {
        self.in_tangent - self.point
    }

    #[inline]
    pub fn out_tangent_relative(&self) -> Vec2 {
        self.out_tangent - self.point
    }

    /// Same vertex traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.point, self.out_tangent, self.in_tangent)
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(
            self.point + offset,
            self.in_tangent + offset,
            self.out_tangent + offset,
        )
    }

    /// Component-wise linear interpolation of all three points.
    #[inline]
    pub fn interpolate(&self, to: &CurveVertex, amount: f64) -> CurveVertex {
        CurveVertex {
            point: lerp_vec2(self.point, to.point, amount),
            in_tangent: lerp_vec2(self.in_tangent, to.in_tangent, amount),
            out_tangent: lerp_vec2(self.out_tangent, to.out_tangent, amount),
        }
    }

    /// Approximate arc length of the cubic segment from this vertex to `to`
    /// (`self.point, self.out_tangent, to.in_tangent, to.point`), measured
    /// as a polyline of `steps` pieces. `steps == 0` is treated as 1.
    pub fn segment_length(&self, to: &CurveVertex, steps: usize) -> f64 {
        let steps = steps.max(1);
        let (p0, c1, c2, p3) = (self.point, self.out_tangent, to.in_tangent, to.point);
        let mut length = 0.0;
        let mut prev = p0;
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let next = cubic_point(p0, c1, c2, p3, t);
            length += prev.distance(next);
            prev = next;
        }
        length
    }
}
