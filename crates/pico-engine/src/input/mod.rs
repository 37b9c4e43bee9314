//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Backends translate platform events into [`Event`]s; the input filter in
//! `core` intercepts built-in [`Gesture`]s before matching an [`EventClass`].

mod event;
mod gesture;
mod state;
mod types;

pub mod platform;

pub use event::{Event, EventClass, EventKind, KeyEvent, MouseButtonEvent, MouseMotionEvent};
pub use gesture::{zoomed, Gesture, PAN_STEP, ZOOM_STEP_PCT};
pub use state::InputState;
pub use types::{Key, Modifiers, MouseButton, MouseWheelDelta};
