//! The drawing context callers talk to.
//!
//! [`Pico`] ties the render state, the present pipeline, the asset cache and
//! the input filter to one [`Backend`](crate::backend::Backend). Operations
//! are split by concern:
//! - `ctx`: lifecycle, setters, getters
//! - `size`: canvas sizing and present
//! - `draw`: shapes, text, images, sounds
//! - `input`: event fetch and built-in gestures
//! - `command`: enum front-end over the setters and draw calls

mod command;
mod config;
mod ctx;
mod draw;
mod error;
mod input;
mod size;

pub use command::{DrawCommand, SetCommand};
pub use config::PicoConfig;
pub use ctx::Pico;
pub use error::{PicoError, Result};
pub use size::{CanvasSize, LogicalSize, PhysicalSize};
