//! Path element storage and the flat-layout capability.
//!
//! [`BezierPath`](crate::path::BezierPath) is generic over its element type.
//! Whether a batch interpolation can run over a packed `f64` buffer is a
//! property of that type: only types implementing [`FlatLayout`] hand out a
//! flat view, and that is fixed at compile time per type.

use std::mem::size_of;

use serde::{Deserialize, Serialize};

use crate::interp::{lerp_f64, Interpolatable};
use crate::vertex::CurveVertex;

/// Types whose memory is exactly `COMPONENTS` packed `f64`s.
///
/// Implementors must consist solely of `f64` fields (directly or through
/// other `FlatLayout` types) so that element-wise arithmetic over the cast
/// buffer is meaningful. Pair every impl with [`assert_flat_layout`] in a
/// const item so a size drift fails the build.
pub trait FlatLayout: bytemuck::Pod {
    const COMPONENTS: usize;
}

/// Compile-time check that `T` occupies exactly `T::COMPONENTS` doubles.
pub const fn assert_flat_layout<T: FlatLayout>() {
    assert!(size_of::<T>() == T::COMPONENTS * size_of::<f64>());
}

/// View a slice of flat elements as its packed components.
#[inline]
pub fn flat_components<T: FlatLayout>(items: &[T]) -> &[f64] {
    bytemuck::cast_slice(items)
}

#[inline]
pub fn flat_components_mut<T: FlatLayout>(items: &mut [T]) -> &mut [f64] {
    bytemuck::cast_slice_mut(items)
}

impl FlatLayout for CurveVertex {
    const COMPONENTS: usize = 6;
}

const _: () = assert_flat_layout::<CurveVertex>();

/// Element abstraction stored by a bezier path.
pub trait PathElementStorage: Copy + Default {
    fn vertex(&self) -> CurveVertex;

    fn set_vertex(&mut self, vertex: CurveVertex);

    /// Store the length of the segment starting at this element.
    /// Elements without a length slot ignore it.
    #[inline]
    fn set_length(&mut self, _length: f64) {}

    fn from_vertex(vertex: CurveVertex) -> Self {
        let mut element = Self::default();
        element.set_vertex(vertex);
        element
    }

    /// Packed `f64` view of `elements`, or `None` when the element type has
    /// no flat layout.
    #[inline]
    fn flat_view(_elements: &[Self]) -> Option<&[f64]> {
        None
    }

    #[inline]
    fn flat_view_mut(_elements: &mut [Self]) -> Option<&mut [f64]> {
        None
    }
}

/// One vertex of a vector path: exactly a [`CurveVertex`], 48 bytes.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PathElement {
    pub vertex: CurveVertex,
}

unsafe impl bytemuck::Zeroable for PathElement {}
unsafe impl bytemuck::Pod for PathElement {}

impl FlatLayout for PathElement {
    const COMPONENTS: usize = 6;
}

const _: () = assert_flat_layout::<PathElement>();

impl PathElement {
    pub const fn new(vertex: CurveVertex) -> Self {
        Self { vertex }
    }
}

impl From<CurveVertex> for PathElement {
    fn from(vertex: CurveVertex) -> Self {
        Self::new(vertex)
    }
}

impl PathElementStorage for PathElement {
    #[inline]
    fn vertex(&self) -> CurveVertex {
        self.vertex
    }

    #[inline]
    fn set_vertex(&mut self, vertex: CurveVertex) {
        self.vertex = vertex;
    }

    #[inline]
    fn from_vertex(vertex: CurveVertex) -> Self {
        Self::new(vertex)
    }

    #[inline]
    fn flat_view(elements: &[Self]) -> Option<&[f64]> {
        Some(flat_components(elements))
    }

    #[inline]
    fn flat_view_mut(elements: &mut [Self]) -> Option<&mut [f64]> {
        Some(flat_components_mut(elements))
    }
}

impl Interpolatable for PathElement {
    #[inline]
    fn interpolate(&self, to: &Self, amount: f64) -> Self {
        Self::new(self.vertex.interpolate(&to.vertex, amount))
    }
}

/// Path element that also caches the length of the segment starting at it.
///
/// Seven doubles wide, so it never takes the flat kernel.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MeasuredPathElement {
    pub vertex: CurveVertex,
    #[serde(default)]
    pub length: f64,
}

impl MeasuredPathElement {
    pub const fn new(vertex: CurveVertex) -> Self {
        Self {
            vertex,
            length: 0.0,
        }
    }
}

impl PathElementStorage for MeasuredPathElement {
    #[inline]
    fn vertex(&self) -> CurveVertex {
        self.vertex
    }

    #[inline]
    fn set_vertex(&mut self, vertex: CurveVertex) {
        self.vertex = vertex;
    }

    #[inline]
    fn set_length(&mut self, length: f64) {
        self.length = length;
    }
}

impl Interpolatable for MeasuredPathElement {
    fn interpolate(&self, to: &Self, amount: f64) -> Self {
        Self {
            vertex: self.vertex.interpolate(&to.vertex, amount),
            length: lerp_f64(self.length, to.length, amount),
        }
    }
}
