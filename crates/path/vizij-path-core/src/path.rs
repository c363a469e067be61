//! Bezier path container.

use serde::{Deserialize, Serialize};

use crate::batch::batch_interpolate;
use crate::element::{PathElement, PathElementStorage};
use crate::error::PathError;
use crate::vertex::CurveVertex;

/// Default polyline subdivisions per segment for [`BezierPath::remeasure`].
pub const DEFAULT_MEASURE_STEPS: usize = 16;

/// Ordered, mutable sequence of path elements describing a piecewise cubic
/// shape. The element type decides whether batch interpolation can use the
/// flat kernel (see [`PathElementStorage::flat_view`]).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(bound(
    serialize = "E: Serialize",
    deserialize = "E: Deserialize<'de>"
))]
pub struct BezierPath<E = PathElement> {
    elements: Vec<E>,
    #[serde(default)]
    closed: bool,
    /// Total length from the last remeasure.
    #[serde(skip)]
    length: f64,
}

impl<E: PathElementStorage> BezierPath<E> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            closed: false,
            length: 0.0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            closed: false,
            length: 0.0,
        }
    }

    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = CurveVertex>,
    {
        Self {
            elements: vertices.into_iter().map(E::from_vertex).collect(),
            closed: false,
            length: 0.0,
        }
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Resize to `count` elements. New slots hold `E::default()`; callers are
    /// expected to overwrite them.
    pub fn set_element_count(&mut self, count: usize) {
        if count > self.elements.capacity() {
            log::debug!(
                "bezier path growing from {} to {} elements",
                self.elements.capacity(),
                count
            );
        }
        self.elements.resize(count, E::default());
    }

    #[inline]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    #[inline]
    pub fn elements_mut(&mut self) -> &mut [E] {
        &mut self.elements
    }

    pub fn vertices(&self) -> impl Iterator<Item = CurveVertex> + '_ {
        self.elements.iter().map(E::vertex)
    }

    /// Overwrite the vertex at `index`. With `remeasure` the segment lengths
    /// and the cached total are recomputed; without it nothing else changes.
    pub fn update_vertex(
        &mut self,
        vertex: CurveVertex,
        index: usize,
        remeasure: bool,
    ) -> Result<(), PathError> {
        let len = self.elements.len();
        let element = self
            .elements
            .get_mut(index)
            .ok_or(PathError::IndexOutOfBounds { index, len })?;
        element.set_vertex(vertex);
        if remeasure {
            self.remeasure(DEFAULT_MEASURE_STEPS);
        }
        Ok(())
    }

    /// Append a vertex. Does not remeasure.
    pub fn add_vertex(&mut self, vertex: CurveVertex) {
        self.elements.push(E::from_vertex(vertex));
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Total length from the last [`remeasure`](Self::remeasure).
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Recompute per-segment lengths and the total.
    ///
    /// Each element stores the length of the segment that starts at it. The
    /// last element stores the closing segment on closed paths and 0
    /// otherwise.
    pub fn remeasure(&mut self, steps: usize) {
        let count = self.elements.len();
        let mut total = 0.0;
        for i in 0..count {
            let next = if i + 1 < count {
                Some(i + 1)
            } else if self.closed && count > 1 {
                Some(0)
            } else {
                None
            };
            let segment = match next {
                Some(j) => self.elements[i]
                    .vertex()
                    .segment_length(&self.elements[j].vertex(), steps),
                None => 0.0,
            };
            self.elements[i].set_length(segment);
            total += segment;
        }
        self.length = total;
    }

    /// Same shape traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut out = Self::from_vertices(
            self.elements
                .iter()
                .rev()
                .map(|element| element.vertex().reversed()),
        );
        out.closed = self.closed;
        out
    }

    /// Allocate a new path holding the interpolation between `self` and `to`.
    pub fn interpolate(&self, to: &Self, amount: f64) -> Self {
        let mut out = Self::with_capacity(self.element_count().min(to.element_count()));
        batch_interpolate(&self.elements, &to.elements, &mut out, amount);
        out.closed = self.closed;
        out
    }
}

impl<E: PathElementStorage> FromIterator<CurveVertex> for BezierPath<E> {
    fn from_iter<I: IntoIterator<Item = CurveVertex>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}
