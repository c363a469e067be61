//! Interpolation helpers:
//! - lerp_f64 / lerp_vec2 (scalar law shared by every value type)
//! - lerp_flat (bulk kernel over packed f64 buffers)
//! - cubic_point (cubic bezier evaluation used when measuring segments)

use crate::point::Vec2;

/// Width of the unrolled inner loop in [`lerp_flat`].
pub const LANES: usize = 4;

/// Linear interpolation of scalars.
///
/// Every interpolation in this crate bottoms out here so the flat kernel and
/// the per-vertex path produce identical bits.
#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    Vec2::new(lerp_f64(a.x, b.x, t), lerp_f64(a.y, b.y, t))
}

/// Element-wise `out[i] = from[i] + t * (to[i] - from[i])` over the shortest
/// of the three buffers, in index order.
///
/// The body is split into fixed `LANES`-wide chunks plus a remainder so the
/// optimizer can emit vector instructions for the main loop.
pub fn lerp_flat(from: &[f64], to: &[f64], out: &mut [f64], t: f64) {
    let n = out.len().min(from.len()).min(to.len());
    let (from, to, out) = (&from[..n], &to[..n], &mut out[..n]);

    let mut out_chunks = out.chunks_exact_mut(LANES);
    let mut from_chunks = from.chunks_exact(LANES);
    let mut to_chunks = to.chunks_exact(LANES);
    for ((o, a), b) in (&mut out_chunks)
        .zip(&mut from_chunks)
        .zip(&mut to_chunks)
    {
        for k in 0..LANES {
            o[k] = lerp_f64(a[k], b[k], t);
        }
    }

    for ((o, a), b) in out_chunks
        .into_remainder()
        .iter_mut()
        .zip(from_chunks.remainder())
        .zip(to_chunks.remainder())
    {
        *o = lerp_f64(*a, *b, t);
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Point on the cubic segment `p0 -> p3` with control points `c1`, `c2`.
#[inline]
pub fn cubic_point(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, t: f64) -> Vec2 {
    Vec2::new(
        cubic_bezier(p0.x, c1.x, c2.x, p3.x, t),
        cubic_bezier(p0.y, c1.y, c2.y, p3.y, t),
    )
}
