//! Desktop window backend.
//!
//! Owns the `winit` event loop and window, and wires them to the GPU layer.

mod backend;
mod runtime;

pub use backend::{WinitBackend, WinitConfig};
