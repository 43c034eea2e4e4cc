//! SwipeCard widget
//!
//! A single item dragged by pointer input that, on release, either snaps
//! back to its origin or leaves through one of the container's four edges.

mod animation_driver;
mod bounds;
mod config;
mod exit;
mod host;
mod swipe_card;

pub use animation_driver::{AnimationDriver, AnimationRun};
pub use bounds::Geometry;
pub use config::*;
pub use exit::{BadgeAlpha, ExitClassifier, ExitOutcome};
pub use host::{Badge, Badges, ContainerLayout, DraggableHandle, FeedbackSink, SwipeListener};
pub use swipe_card::SwipeCard;

pub use swipecard_animation::{AnimationEngine, AnimationFrame, TweenAnimator};
pub use swipecard_foundation::{PointerEvent, PointerEventKind, PointerId, PointerSample};
pub use swipecard_ui_graphics::{Point, Rect, Size};

pub mod prelude {
    pub use crate::config::{LegacyQuirks, SwipeConfig};
    pub use crate::exit::ExitOutcome;
    pub use crate::host::{
        Badge, Badges, ContainerLayout, DraggableHandle, FeedbackSink, SwipeListener,
    };
    pub use crate::swipe_card::SwipeCard;
    pub use swipecard_foundation::prelude::*;
    pub use swipecard_ui_graphics::prelude::*;
}
