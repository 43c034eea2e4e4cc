//! The draggable card widget.
//!
//! A drag follows the active pointer and fades the badges in with distance.
//! On release the item either flies off the edge it was dropped beyond or
//! springs back to where it started; the listener hears about an exit only
//! once its animation has finished.

use crate::animation_driver::{AnimationDriver, AnimationRun};
use crate::bounds::Geometry;
use crate::config::{ConfigError, SwipeConfig};
use crate::exit::{ExitClassifier, ExitOutcome};
use crate::host::{Badge, Badges, ContainerLayout, DraggableHandle, FeedbackSink, SwipeListener};
use std::rc::Rc;
use swipecard_animation::AnimationEngine;
use swipecard_foundation::{DragEvent, GestureTracker, PointerEvent, PointerEventKind, PointerSession};
use swipecard_ui_graphics::Point;

pub struct SwipeCard {
    item: Rc<dyn DraggableHandle>,
    container: Rc<dyn ContainerLayout>,
    engine: Box<dyn AnimationEngine>,
    badges: Badges,
    listener: Option<Rc<dyn SwipeListener>>,
    config: SwipeConfig,
    tracker: GestureTracker,
    geometry: Geometry,
    classifier: ExitClassifier,
    driver: AnimationDriver,
    attached: bool,
}

impl SwipeCard {
    pub fn new(
        item: Rc<dyn DraggableHandle>,
        container: Rc<dyn ContainerLayout>,
        engine: Box<dyn AnimationEngine>,
        config: SwipeConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            item,
            container,
            engine,
            badges: Badges::new(),
            listener: None,
            classifier: ExitClassifier::new(config.quirks),
            driver: AnimationDriver::new(config.accelerate_factor, config.overshoot_tension),
            config,
            tracker: GestureTracker::new(),
            geometry: Geometry::ZERO,
            attached: true,
        })
    }

    /// Install badge sinks; they start fully transparent.
    pub fn with_badges(mut self, badges: Badges) -> Self {
        badges.clear();
        self.badges = badges;
        self
    }

    pub fn set_badge(&mut self, badge: Badge, sink: Option<Rc<dyn FeedbackSink>>) {
        if let Some(sink) = &sink {
            sink.set_alpha(0.0);
        }
        self.badges.set(badge, sink);
    }

    pub fn set_listener(&mut self, listener: Option<Rc<dyn SwipeListener>>) {
        self.listener = listener;
    }

    pub fn listener(&self) -> Option<&Rc<dyn SwipeListener>> {
        self.listener.as_ref()
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn session(&self) -> Option<&PointerSession> {
        self.tracker.session()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    pub fn current_run(&self) -> Option<&AnimationRun> {
        self.driver.current()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop consuming pointer input. A drag in progress is abandoned and the
    /// item goes back to its origin; a running animation still completes.
    pub fn detach(&mut self) {
        self.attached = false;
        if self.tracker.is_dragging() {
            log::debug!("detached mid-drag, abandoning gesture");
            self.container.request_disallow_intercept(false);
        }
        self.stop_tracking();
    }

    /// Feed one pointer event. Returns true if the card consumed it.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !self.attached {
            return false;
        }
        if self.driver.is_running() {
            log::debug!("{:?} ignored while animating", event.kind);
            event.consume();
            return true;
        }

        if event.kind == PointerEventKind::Down {
            self.start_tracking();
        }

        match self.tracker.on_pointer_event(event) {
            Some(DragEvent::Started { pointer, down_point }) => {
                log::trace!("drag started by pointer {} at {:?}", pointer, down_point);
                self.container.request_disallow_intercept(true);
            }
            Some(DragEvent::Moved { position, offset }) => {
                self.item.set_position(position);
                self.badges
                    .apply(self.classifier.badge_alpha(offset, &self.geometry));
            }
            Some(DragEvent::Released { offset }) => {
                self.container.request_disallow_intercept(false);
                self.release(offset);
            }
            Some(DragEvent::Cancelled { offset }) => {
                log::debug!("drag cancelled at offset {:?}", offset);
                self.container.request_disallow_intercept(false);
                self.settle(ExitOutcome::Reset);
            }
            None => {}
        }

        event.consume();
        true
    }

    /// Advance the running animation to `frame_time_nanos`.
    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        let Some(frame) = self.engine.on_frame(frame_time_nanos) else {
            return;
        };
        self.item.set_position(frame.position);
        if frame.finished {
            if let Some(run) = self.driver.complete() {
                self.on_animation_end(run);
            }
        }
    }

    /// Snapshot origin and geometry. No-op while a session is open.
    pub fn start_tracking(&mut self) {
        if !self.tracker.begin(self.item.position()) {
            return;
        }
        self.geometry = Geometry::capture(self.item.size(), self.container.size(), &self.config);
    }

    /// Put the item back at its origin and clear all session state.
    /// No-op while idle. While an animation runs the session stays open and
    /// is cleared when the run completes.
    pub fn stop_tracking(&mut self) {
        if self.driver.is_running() {
            log::debug!("stop_tracking deferred until the running animation completes");
            return;
        }
        let Some(session) = self.tracker.stop() else {
            return;
        };
        self.item.set_position(session.origin);
        self.geometry = Geometry::ZERO;
        self.badges.clear();
    }

    fn release(&mut self, offset: Point) {
        let live = self.item.position();
        let outcome = self.classifier.classify(live, &self.geometry);
        log::debug!("released at {:?} (offset {:?}): {:?}", live, offset, outcome);
        self.settle(outcome);
    }

    fn settle(&mut self, outcome: ExitOutcome) {
        let origin = self
            .tracker
            .session()
            .map(|session| session.origin)
            .unwrap_or_else(|| self.item.position());
        let live = self.item.position();
        let target = outcome.target(live, origin, &self.geometry);
        let duration = self.config.duration_for(outcome);
        self.driver
            .start_exit(self.engine.as_mut(), outcome, live, target, duration);
    }

    fn on_animation_end(&mut self, run: AnimationRun) {
        self.stop_tracking();

        let Some(listener) = self.listener.as_ref() else {
            return;
        };
        match run.outcome {
            ExitOutcome::Left => listener.on_swipe_left(),
            ExitOutcome::Right => listener.on_swipe_right(),
            ExitOutcome::Top => listener.on_swipe_top(),
            ExitOutcome::Bottom if self.config.quirks.bottom_exit_reports_top => {
                listener.on_swipe_top()
            }
            ExitOutcome::Bottom => listener.on_swipe_bottom(),
            ExitOutcome::Reset => {}
        }
    }
}

impl std::fmt::Debug for SwipeCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeCard")
            .field("session", &self.tracker.session())
            .field("geometry", &self.geometry)
            .field("run", &self.driver.current())
            .field("badges", &self.badges)
            .field("attached", &self.attached)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/swipe_card_tests.rs"]
mod tests;
