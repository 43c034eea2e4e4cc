//! Recording implementations of the host capabilities.

use std::cell::{Cell, RefCell};
use swipecard_ui::{ContainerLayout, DraggableHandle, FeedbackSink, SwipeListener};
use swipecard_ui_graphics::{Point, Rect, Size};

/// Draggable item that remembers every position it was moved to.
#[derive(Debug)]
pub struct FakeItem {
    position: Cell<Point>,
    size: Size,
    history: RefCell<Vec<Point>>,
}

impl FakeItem {
    pub fn new(bounds: Rect) -> Self {
        Self {
            position: Cell::new(bounds.origin()),
            size: bounds.size(),
            history: RefCell::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<Point> {
        self.history.borrow().clone()
    }

    pub fn clear_history(&self) {
        self.history.borrow_mut().clear();
    }
}

impl DraggableHandle for FakeItem {
    fn position(&self) -> Point {
        self.position.get()
    }

    fn set_position(&self, position: Point) {
        self.position.set(position);
        self.history.borrow_mut().push(position);
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[derive(Debug)]
pub struct FakeContainer {
    size: Cell<Size>,
    intercept_requests: RefCell<Vec<bool>>,
}

impl FakeContainer {
    pub fn new(size: Size) -> Self {
        Self {
            size: Cell::new(size),
            intercept_requests: RefCell::new(Vec::new()),
        }
    }

    /// Simulate a relayout between gestures.
    pub fn resize(&self, size: Size) {
        self.size.set(size);
    }

    pub fn intercept_requests(&self) -> Vec<bool> {
        self.intercept_requests.borrow().clone()
    }
}

impl ContainerLayout for FakeContainer {
    fn size(&self) -> Size {
        self.size.get()
    }

    fn request_disallow_intercept(&self, disallow: bool) {
        self.intercept_requests.borrow_mut().push(disallow);
    }
}

#[derive(Debug, Default)]
pub struct RecordingBadge {
    alpha: Cell<f32>,
    updates: Cell<usize>,
}

impl RecordingBadge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alpha(&self) -> f32 {
        self.alpha.get()
    }

    /// Opacity as a renderer would show it.
    pub fn opacity(&self) -> f32 {
        self.alpha.get().clamp(0.0, 1.0)
    }

    pub fn updates(&self) -> usize {
        self.updates.get()
    }
}

impl FeedbackSink for RecordingBadge {
    fn set_alpha(&self, alpha: f32) {
        self.alpha.set(alpha);
        self.updates.set(self.updates.get() + 1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeCall {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Default)]
pub struct RecordingListener {
    calls: RefCell<Vec<SwipeCall>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SwipeCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: SwipeCall) {
        log::debug!("listener received {:?}", call);
        self.calls.borrow_mut().push(call);
    }
}

impl SwipeListener for RecordingListener {
    fn on_swipe_left(&self) {
        self.record(SwipeCall::Left);
    }

    fn on_swipe_right(&self) {
        self.record(SwipeCall::Right);
    }

    fn on_swipe_top(&self) {
        self.record(SwipeCall::Top);
    }

    fn on_swipe_bottom(&self) {
        self.record(SwipeCall::Bottom);
    }
}
