//! Animation system for SwipeCard
//!
//! Time-based tweens with pluggable easing curves, plus the engine contract
//! the widget drives its exit and reset transitions through.

mod animation;
mod engine;

pub use animation::*;
pub use engine::*;

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing, Lerp};
    pub use crate::engine::{AnimationEngine, AnimationFrame, TweenAnimator};
}
