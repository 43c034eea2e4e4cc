//! Pure math/data for SwipeCard
//!
//! Geometry primitives used by the gesture tracker, the animation engine
//! and the widget itself.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
