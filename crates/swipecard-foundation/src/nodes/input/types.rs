use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use swipecard_ui_graphics::Point;

pub type PointerId = u64;

/// Masked action of a pointer event.
///
/// `Down`/`Up` bracket the whole gesture (first contact, last lift);
/// `PointerDown`/`PointerUp` report additional fingers joining or leaving it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    PointerDown,
    Move,
    PointerUp,
    Up,
    Cancel,
}

/// Position of one pointer in contact when an event was dispatched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
}

impl PointerSample {
    pub fn new(id: PointerId, position: Point) -> Self {
        Self { id, position }
    }
}

/// Pointer event with consumption tracking.
///
/// `id` and `position` describe the pointer that changed. `pointers` lists
/// every pointer in contact at dispatch time, including one that is being
/// lifted, so ids can be resolved to indices.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub pointers: SmallVec<[PointerSample; 4]>,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    /// Single-pointer event; `pointers` holds only the changed pointer.
    pub fn new(kind: PointerEventKind, id: PointerId, position: Point) -> Self {
        let mut pointers = SmallVec::new();
        pointers.push(PointerSample::new(id, position));
        Self {
            id,
            kind,
            position,
            pointers,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(id: PointerId, position: Point) -> Self {
        Self::new(PointerEventKind::Down, id, position)
    }

    pub fn moved(id: PointerId, position: Point) -> Self {
        Self::new(PointerEventKind::Move, id, position)
    }

    pub fn up(id: PointerId, position: Point) -> Self {
        Self::new(PointerEventKind::Up, id, position)
    }

    pub fn cancel(id: PointerId, position: Point) -> Self {
        Self::new(PointerEventKind::Cancel, id, position)
    }

    /// Replace the set of pointers in contact.
    pub fn with_pointers(mut self, pointers: impl IntoIterator<Item = PointerSample>) -> Self {
        self.pointers = pointers.into_iter().collect();
        self
    }

    /// Index of `id` within `pointers`, if that pointer is in contact.
    pub fn find_pointer_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|sample| sample.id == id)
    }

    pub fn pointer(&self, index: usize) -> Option<&PointerSample> {
        self.pointers.get(index)
    }

    pub fn position_of(&self, id: PointerId) -> Option<Point> {
        self.find_pointer_index(id)
            .and_then(|index| self.pointer(index))
            .map(|sample| sample.position)
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
