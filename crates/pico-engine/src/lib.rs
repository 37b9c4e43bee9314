//! pico engine crate.
//!
//! Immediate-mode drawing on a logical pixel canvas that is scaled up into a
//! window. [`Pico`] owns the render state and drives a [`Backend`]; the
//! crate ships a desktop backend ([`WinitBackend`]) and an in-memory one
//! ([`HeadlessBackend`]) for tests and off-screen use.

pub mod audio;
pub mod backend;
pub mod cache;
pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod state;
pub mod time;
pub mod window;

pub use backend::{Backend, HeadlessBackend};
pub use cache::LoadMode;
pub use crate::core::{
    CanvasSize, DrawCommand, LogicalSize, PhysicalSize, Pico, PicoConfig, PicoError, Result,
    SetCommand,
};
pub use window::{WinitBackend, WinitConfig};
