pub mod drag;

pub use drag::{DragEvent, GestureTracker, PointerSession};
