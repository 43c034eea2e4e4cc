//! Pointer input and gesture tracking for SwipeCard

pub mod nodes;

pub use nodes::input::gestures::{DragEvent, GestureTracker, PointerSession};
pub use nodes::input::{PointerEvent, PointerEventKind, PointerId, PointerSample};

pub mod prelude {
    pub use crate::nodes::input::gestures::{DragEvent, GestureTracker, PointerSession};
    pub use crate::nodes::input::prelude::*;
}
