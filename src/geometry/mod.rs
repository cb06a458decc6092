//! Geometric primitives used by hit testing and the built-in shapes.
//!
//! Everything here is a plain value type with pure queries. Degenerate input
//! (zero-length lines, collinear points) yields `None` or an empty result
//! rather than panicking.

mod angle;
mod arc;
mod circle;
mod line;
mod point;
mod rect;

pub use angle::Angle;
pub use arc::Arc;
pub use circle::Circle;
pub use line::Line;
pub use point::Point;
pub use rect::{Rect, Size};

/// Tolerance used when comparing floating point coordinates.
pub const EPSILON: f64 = 1e-9;

/// Approximate equality for coordinates.
#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
