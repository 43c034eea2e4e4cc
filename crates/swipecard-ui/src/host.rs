//! Capabilities the widget needs from its host.
//!
//! These take `&self` so hosts can share one handle between the widget and
//! their own code; implementations use interior mutability where they need it.

use crate::exit::BadgeAlpha;
use std::rc::Rc;
use swipecard_ui_graphics::{Point, Size};

/// The item being dragged.
pub trait DraggableHandle {
    /// Absolute position of the item's top-left corner within the container.
    fn position(&self) -> Point;

    fn set_position(&self, position: Point);

    fn size(&self) -> Size;
}

/// The container the item is laid out in.
pub trait ContainerLayout {
    fn size(&self) -> Size;

    /// Ask ancestors not to steal the gesture while a drag is in progress.
    fn request_disallow_intercept(&self, _disallow: bool) {}
}

/// A directional indicator whose opacity tracks drag distance.
pub trait FeedbackSink {
    /// Receives the raw ratio; sinks clamp when mapping it to an opacity.
    fn set_alpha(&self, alpha: f32);
}

/// Host callbacks, each fired at most once per gesture after the exit
/// animation finishes.
pub trait SwipeListener {
    fn on_swipe_left(&self);

    fn on_swipe_right(&self);

    fn on_swipe_top(&self);

    fn on_swipe_bottom(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Badge {
    pub const ALL: [Badge; 4] = [Badge::Left, Badge::Right, Badge::Top, Badge::Bottom];

    fn index(self) -> usize {
        match self {
            Badge::Left => 0,
            Badge::Right => 1,
            Badge::Top => 2,
            Badge::Bottom => 3,
        }
    }
}

/// The four optional badge sinks.
#[derive(Default, Clone)]
pub struct Badges {
    sinks: [Option<Rc<dyn FeedbackSink>>; 4],
}

impl Badges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, badge: Badge, sink: Rc<dyn FeedbackSink>) -> Self {
        self.set(badge, Some(sink));
        self
    }

    pub fn set(&mut self, badge: Badge, sink: Option<Rc<dyn FeedbackSink>>) {
        self.sinks[badge.index()] = sink;
    }

    pub fn get(&self, badge: Badge) -> Option<&Rc<dyn FeedbackSink>> {
        self.sinks[badge.index()].as_ref()
    }

    /// Both horizontal badges get the horizontal ratio, both vertical badges
    /// the vertical one.
    pub fn apply(&self, alpha: BadgeAlpha) {
        for badge in Badge::ALL {
            let value = match badge {
                Badge::Left | Badge::Right => alpha.horizontal,
                Badge::Top | Badge::Bottom => alpha.vertical,
            };
            if let Some(sink) = self.get(badge) {
                sink.set_alpha(value);
            }
        }
    }

    pub fn clear(&self) {
        self.apply(BadgeAlpha::TRANSPARENT);
    }
}

impl std::fmt::Debug for Badges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let attached: Vec<Badge> = Badge::ALL
            .into_iter()
            .filter(|badge| self.get(*badge).is_some())
            .collect();
        f.debug_struct("Badges").field("attached", &attached).finish()
    }
}
