//! Color model shared by the render state and the backends.

mod color;

pub use color::Color;
