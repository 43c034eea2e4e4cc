//! Drag gesture tracker.
//!
//! Turns a raw multi-touch stream into drag deltas for a single item. Only one
//! pointer is tracked at a time; additional fingers never start a second drag.

use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId};
use swipecard_ui_graphics::Point;

/// State of one tracking session, from `begin` to `stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSession {
    /// Pointer being followed, `None` once it has been released.
    pub active_pointer: Option<PointerId>,
    /// Item position when tracking began.
    pub origin: Point,
    /// Contact position of the active pointer.
    pub down_point: Point,
    /// Accumulated movement since contact.
    pub offset: Point,
}

impl PointerSession {
    fn new(origin: Point) -> Self {
        Self {
            active_pointer: None,
            origin,
            down_point: Point::ZERO,
            offset: Point::ZERO,
        }
    }

    /// Live item position: origin plus accumulated offset.
    pub fn position(&self) -> Point {
        self.origin + self.offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Started { pointer: PointerId, down_point: Point },
    Moved { position: Point, offset: Point },
    Released { offset: Point },
    Cancelled { offset: Point },
}

#[derive(Debug, Default, Clone)]
pub struct GestureTracker {
    session: Option<PointerSession>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True between `begin` and `stop`.
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// True while a pointer is in contact and being followed.
    pub fn is_dragging(&self) -> bool {
        self.session
            .is_some_and(|session| session.active_pointer.is_some())
    }

    pub fn session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    /// Start a session anchored at `origin`. Returns false if one is already open.
    pub fn begin(&mut self, origin: Point) -> bool {
        if self.session.is_some() {
            return false;
        }
        log::trace!("tracking started at {:?}", origin);
        self.session = Some(PointerSession::new(origin));
        true
    }

    /// End the session, handing it back so the caller can restore the origin.
    pub fn stop(&mut self) -> Option<PointerSession> {
        let session = self.session.take();
        if session.is_some() {
            log::trace!("tracking stopped");
        }
        session
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        let Some(session) = self.session.as_mut() else {
            log::debug!("pointer event {:?} ignored: not tracking", event.kind);
            return None;
        };

        match event.kind {
            PointerEventKind::Down => {
                if let Some(active) = session.active_pointer {
                    log::debug!("contact {} ignored: pointer {} already active", event.id, active);
                    return None;
                }
                session.active_pointer = Some(event.id);
                session.down_point = event.position;
                session.offset = Point::ZERO;
                Some(DragEvent::Started {
                    pointer: event.id,
                    down_point: event.position,
                })
            }
            PointerEventKind::PointerDown => None,
            PointerEventKind::Move => {
                let active = session.active_pointer?;
                let Some(current) = event.position_of(active) else {
                    log::trace!("move without active pointer {}", active);
                    return None;
                };
                session.offset = current - session.down_point;
                Some(DragEvent::Moved {
                    position: session.position(),
                    offset: session.offset,
                })
            }
            PointerEventKind::PointerUp => {
                let active = session.active_pointer?;
                if event.id != active {
                    return None;
                }
                // Hand the drag over to another finger still in contact,
                // rebasing the down point so the item stays where it is.
                let replacement = event
                    .pointers
                    .iter()
                    .find(|sample| sample.id != active)
                    .copied();
                match replacement {
                    Some(sample) => {
                        log::trace!("active pointer {} handed over to {}", active, sample.id);
                        session.active_pointer = Some(sample.id);
                        session.down_point = sample.position - session.offset;
                        None
                    }
                    None => {
                        session.active_pointer = None;
                        Some(DragEvent::Released {
                            offset: session.offset,
                        })
                    }
                }
            }
            PointerEventKind::Up => {
                let active = session.active_pointer?;
                if event.id != active {
                    log::debug!("release of untracked pointer {} ignored", event.id);
                    return None;
                }
                session.active_pointer = None;
                Some(DragEvent::Released {
                    offset: session.offset,
                })
            }
            PointerEventKind::Cancel => {
                // Cancellation applies to the whole gesture, whichever pointer reports it.
                session.active_pointer.take()?;
                Some(DragEvent::Cancelled {
                    offset: session.offset,
                })
            }
        }
    }
}
