//! Per-session geometry snapshot.

use crate::config::SwipeConfig;
use swipecard_ui_graphics::Size;

/// Item and container dimensions plus the four exit boundaries, captured once
/// when a drag begins. Zeroed while no session is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub item: Size,
    pub half_item: Size,
    pub container: Size,
    pub left_boundary: f32,
    pub right_boundary: f32,
    pub top_boundary: f32,
    pub bottom_boundary: f32,
}

impl Geometry {
    pub const ZERO: Geometry = Geometry {
        item: Size::ZERO,
        half_item: Size::ZERO,
        container: Size::ZERO,
        left_boundary: 0.0,
        right_boundary: 0.0,
        top_boundary: 0.0,
        bottom_boundary: 0.0,
    };

    pub fn capture(item: Size, container: Size, config: &SwipeConfig) -> Self {
        if container.is_empty() {
            log::warn!("swipe container has no area ({:?}); exits cannot trigger", container);
        }
        let sections = config.section_count;
        let outer = (sections - 1.0) / sections;
        let bottom_boundary = if config.quirks.bottom_boundary_precedence_bug {
            container.height * (sections - 1.0 / sections)
        } else {
            container.height * outer
        };

        Self {
            item,
            half_item: item.half(),
            container,
            left_boundary: container.width * (1.0 / sections),
            right_boundary: container.width * outer,
            top_boundary: container.height * (1.0 / sections),
            bottom_boundary,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::ZERO
    }
}
