//! Batch interpolation between two path keyframes.
//!
//! The keyframe layer calls [`batch_interpolate`] once per frame for every
//! animated path property. Element types with a flat layout
//! ([`PathElement`](crate::element::PathElement)) run through the packed f64
//! kernel; everything else interpolates vertex by vertex. Both paths apply
//! the same law in the same order, so their results are bit-identical.

use crate::config::Config;
use crate::element::PathElementStorage;
use crate::interp::lerp_flat;
use crate::path::BezierPath;

/// Interpolate `from` towards `to` by `amount`, writing into `result`.
///
/// `result` is resized to `min(from.len(), to.len())`; trailing elements of
/// the longer input are ignored. `amount` is not clamped, so values outside
/// `[0, 1]` extrapolate. `from` and `to` are never modified.
pub fn batch_interpolate<E: PathElementStorage>(
    from: &[E],
    to: &[E],
    result: &mut BezierPath<E>,
    amount: f64,
) {
    interpolate_into(from, to, result, amount, true);
}

/// Same contract as [`batch_interpolate`] but always takes the per-vertex
/// path, regardless of the element layout.
pub fn batch_interpolate_scalar<E: PathElementStorage>(
    from: &[E],
    to: &[E],
    result: &mut BezierPath<E>,
    amount: f64,
) {
    interpolate_into(from, to, result, amount, false);
}

fn interpolate_into<E: PathElementStorage>(
    from: &[E],
    to: &[E],
    result: &mut BezierPath<E>,
    amount: f64,
    allow_flat: bool,
) {
    let element_count = from.len().min(to.len());
    result.set_element_count(element_count);
    if element_count == 0 {
        return;
    }
    let (from, to) = (&from[..element_count], &to[..element_count]);

    if allow_flat {
        if let (Some(a), Some(b), Some(out)) = (
            E::flat_view(from),
            E::flat_view(to),
            E::flat_view_mut(result.elements_mut()),
        ) {
            log::trace!(
                "batch interpolate: flat kernel over {} elements ({} values)",
                element_count,
                out.len()
            );
            lerp_flat(a, b, out, amount);
            return;
        }
    }

    log::trace!("batch interpolate: per-vertex path over {element_count} elements");
    // Equivalent to update_vertex(v, i, false) for every i < element_count:
    // no remeasure and no closure bookkeeping.
    for (slot, (a, b)) in result
        .elements_mut()
        .iter_mut()
        .zip(from.iter().zip(to))
    {
        slot.set_vertex(a.vertex().interpolate(&b.vertex(), amount));
    }
}

/// Batch interpolator bound to a [`Config`].
#[derive(Clone, Debug, Default)]
pub struct PathInterpolator {
    config: Config,
}

impl PathInterpolator {
    /// Build from `config`. An invalid config is replaced by the defaults.
    pub fn new(config: Config) -> Self {
        match config.validate() {
            Ok(()) => Self { config },
            Err(err) => {
                log::warn!("{err}; falling back to default path interpolator config");
                Self::default()
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn interpolate<E: PathElementStorage>(
        &self,
        from: &[E],
        to: &[E],
        result: &mut BezierPath<E>,
        amount: f64,
    ) {
        interpolate_into(from, to, result, amount, self.config.features.flat_lerp);
        if self.config.remeasure_results {
            result.remeasure(self.config.measure_steps);
        }
    }
}
