//! Vizij Path Core (engine-agnostic)
//!
//! Bezier path model and the batch interpolator used to blend two path
//! keyframes into an in-between shape. Keyframe timing, easing and scene
//! loading live in the animation layers that call into this crate.

pub mod batch;
pub mod config;
pub mod element;
pub mod error;
pub mod interp;
pub mod path;
pub mod point;
pub mod vertex;

// Re-exports for consumers (adapters)
pub use batch::{batch_interpolate, batch_interpolate_scalar, PathInterpolator};
pub use config::{Config, Features};
pub use element::{FlatLayout, MeasuredPathElement, PathElement, PathElementStorage};
pub use error::PathError;
pub use interp::Interpolatable;
pub use path::BezierPath;
pub use point::Vec2;
pub use vertex::CurveVertex;
