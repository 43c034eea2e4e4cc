//! Robot-style driver for scripting gestures against a [`SwipeCard`].
//!
//! The robot owns the card together with recording fakes for every host
//! capability and a synthetic frame clock, so a test can press, drag and
//! release, then pump frames until the card is idle.
//!
//! ```
//! use swipecard_testing::{SwipeCall, SwipeRobot};
//!
//! let mut robot = SwipeRobot::standard().expect("default config is valid");
//! robot.drag_by(-260.0, 0.0, 4);
//! robot.wait_for_idle();
//! assert_eq!(robot.listener().calls(), vec![SwipeCall::Left]);
//! ```

use crate::fakes::{FakeContainer, FakeItem, RecordingBadge, RecordingListener};
use std::rc::Rc;
use swipecard_animation::TweenAnimator;
use swipecard_foundation::{PointerEvent, PointerEventKind, PointerId, PointerSample};
use swipecard_ui::{
    Badge, Badges, ConfigError, DraggableHandle, SwipeCard, SwipeConfig, SwipeListener,
};
use swipecard_ui_graphics::{Point, Rect, Size};

/// ~60 FPS.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames pumped by [`SwipeRobot::wait_for_idle`].
pub const MAX_IDLE_FRAMES: usize = 600;

pub struct SwipeRobot {
    card: SwipeCard,
    item: Rc<FakeItem>,
    container: Rc<FakeContainer>,
    badges: [Rc<RecordingBadge>; 4],
    listener: Rc<RecordingListener>,
    frame_time_nanos: u64,
}

impl SwipeRobot {
    pub fn new(container: Size, item: Rect, config: SwipeConfig) -> Result<Self, ConfigError> {
        let item = Rc::new(FakeItem::new(item));
        let container = Rc::new(FakeContainer::new(container));
        let badges = [
            Rc::new(RecordingBadge::new()),
            Rc::new(RecordingBadge::new()),
            Rc::new(RecordingBadge::new()),
            Rc::new(RecordingBadge::new()),
        ];
        let listener = Rc::new(RecordingListener::new());

        let sinks = Badge::ALL
            .into_iter()
            .zip(badges.iter())
            .fold(Badges::new(), |sinks, (badge, sink)| sinks.with(badge, sink.clone()));

        let mut card = SwipeCard::new(
            item.clone(),
            container.clone(),
            Box::new(TweenAnimator::new(item.position())),
            config,
        )?
        .with_badges(sinks);
        card.set_listener(Some(listener.clone() as Rc<dyn SwipeListener>));

        Ok(Self {
            card,
            item,
            container,
            badges,
            listener,
            frame_time_nanos: 0,
        })
    }

    /// 600×600 container with a 100×100 item centred at (250, 250).
    pub fn standard() -> Result<Self, ConfigError> {
        Self::with_config(SwipeConfig::default())
    }

    /// The standard layout with a custom configuration.
    pub fn with_config(config: SwipeConfig) -> Result<Self, ConfigError> {
        Self::new(
            Size::new(600.0, 600.0),
            Rect::from_origin_size(Point::new(250.0, 250.0), Size::new(100.0, 100.0)),
            config,
        )
    }

    pub fn card(&self) -> &SwipeCard {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut SwipeCard {
        &mut self.card
    }

    pub fn item(&self) -> &FakeItem {
        &self.item
    }

    pub fn container(&self) -> &FakeContainer {
        &self.container
    }

    pub fn listener(&self) -> &RecordingListener {
        &self.listener
    }

    pub fn badge(&self, badge: Badge) -> &RecordingBadge {
        let index = match badge {
            Badge::Left => 0,
            Badge::Right => 1,
            Badge::Top => 2,
            Badge::Bottom => 3,
        };
        &self.badges[index]
    }

    pub fn item_position(&self) -> Point {
        self.item.position()
    }

    /// Centre of the item's current bounds.
    pub fn item_center(&self) -> Point {
        Rect::from_origin_size(self.item.position(), self.item.size()).center()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Deliver an arbitrary event. Returns whether the card consumed it.
    pub fn send(&mut self, event: PointerEvent) -> bool {
        self.card.on_pointer_event(&event)
    }

    pub fn press(&mut self, id: PointerId, at: Point) -> bool {
        self.send(PointerEvent::down(id, at))
    }

    pub fn move_to(&mut self, id: PointerId, to: Point) -> bool {
        self.send(PointerEvent::moved(id, to))
    }

    pub fn release(&mut self, id: PointerId, at: Point) -> bool {
        self.send(PointerEvent::up(id, at))
    }

    pub fn cancel(&mut self, id: PointerId, at: Point) -> bool {
        self.send(PointerEvent::cancel(id, at))
    }

    /// A secondary finger touching down while `pointers` are in contact.
    pub fn press_secondary(&mut self, id: PointerId, at: Point, pointers: &[PointerSample]) -> bool {
        self.send(
            PointerEvent::new(PointerEventKind::PointerDown, id, at)
                .with_pointers(pointers.iter().copied()),
        )
    }

    /// A finger lifting while others stay down; `pointers` includes the lifted one.
    pub fn release_secondary(
        &mut self,
        id: PointerId,
        at: Point,
        pointers: &[PointerSample],
    ) -> bool {
        self.send(
            PointerEvent::new(PointerEventKind::PointerUp, id, at)
                .with_pointers(pointers.iter().copied()),
        )
    }

    /// Press on the item centre, move by `(dx, dy)` in `steps` moves, release.
    pub fn drag_by(&mut self, dx: f32, dy: f32, steps: usize) {
        let start = self.item_center();
        let end = self.drag_without_release(dx, dy, steps);
        log::trace!("robot drag {:?} -> {:?}", start, end);
        self.release(0, end);
    }

    /// Press on the item centre and move by `(dx, dy)`; the pointer stays down.
    /// Returns the final pointer position.
    pub fn drag_without_release(&mut self, dx: f32, dy: f32, steps: usize) -> Point {
        let start = self.item_center();
        self.press(0, start);
        let steps = steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.move_to(0, start.offset_by(dx * fraction, dy * fraction));
        }
        start.offset_by(dx, dy)
    }

    /// Pump one frame `nanos` after the previous one.
    pub fn advance_time(&mut self, nanos: u64) {
        self.frame_time_nanos += nanos;
        self.card.on_frame(self.frame_time_nanos);
    }

    pub fn advance_frame(&mut self) {
        self.advance_time(FRAME_NANOS);
    }

    /// Pump frames until no animation is running. Returns the frame count.
    pub fn wait_for_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.card.is_animating() && frames < MAX_IDLE_FRAMES {
            self.advance_frame();
            frames += 1;
        }
        if self.card.is_animating() {
            log::warn!("card still animating after {} frames", frames);
        }
        frames
    }
}

impl std::fmt::Debug for SwipeRobot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeRobot")
            .field("card", &self.card)
            .field("frame_time_nanos", &self.frame_time_nanos)
            .finish()
    }
}
