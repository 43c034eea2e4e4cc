//! Frame-driven position animation.
//!
//! The host pumps frames with a monotonically increasing timestamp; the engine
//! reports the interpolated position for each frame and flags the final one.

use crate::animation::{AnimationSpec, Lerp};
use swipecard_ui_graphics::Point;

/// One sampled frame of a running animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub position: Point,
    /// Set on exactly one frame per animation: the one that lands on the target.
    pub finished: bool,
}

/// Capability the widget needs from an animation engine.
///
/// `animate` replaces whatever was running. `on_frame` returns `None` while
/// idle, so a finished animation is reported once and never again.
pub trait AnimationEngine {
    fn animate(&mut self, from: Point, to: Point, spec: AnimationSpec);

    fn on_frame(&mut self, frame_time_nanos: u64) -> Option<AnimationFrame>;

    fn is_running(&self) -> bool;
}

/// Tween engine interpolating a [`Point`] with an [`AnimationSpec`].
#[derive(Debug, Clone)]
pub struct TweenAnimator {
    current: Point,
    start: Point,
    target: Point,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    running: bool,
}

impl TweenAnimator {
    pub fn new(initial: Point) -> Self {
        Self {
            current: initial,
            start: initial,
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            running: false,
        }
    }
}

impl Default for TweenAnimator {
    fn default() -> Self {
        Self::new(Point::ZERO)
    }
}

impl AnimationEngine for TweenAnimator {
    fn animate(&mut self, from: Point, to: Point, spec: AnimationSpec) {
        if self.running {
            log::trace!("tween retargeted from {:?} to {:?}", self.target, to);
        }
        self.current = from;
        self.start = from;
        self.target = to;
        self.spec = spec;
        self.start_time_nanos = None;
        self.running = true;
    }

    fn on_frame(&mut self, frame_time_nanos: u64) -> Option<AnimationFrame> {
        if !self.running {
            return None;
        }

        // The first frame after `animate` anchors the timeline.
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = (self.spec.duration_millis * 1_000_000).max(1);
        let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear_progress >= 1.0 {
            self.current = self.target;
            self.start = self.target;
            self.start_time_nanos = None;
            self.running = false;
            return Some(AnimationFrame {
                position: self.target,
                finished: true,
            });
        }

        let progress = self.spec.easing.transform(linear_progress);
        self.current = self.start.lerp(&self.target, progress);
        Some(AnimationFrame {
            position: self.current,
            finished: false,
        })
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
