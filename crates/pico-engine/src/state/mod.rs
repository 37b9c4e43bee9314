//! Render state read by every draw call.
//!
//! Plain data: mutated by the `set_*` operations on [`Pico`](crate::Pico),
//! never by the backends.

mod cursor;
mod image;

use std::path::PathBuf;

use crate::coords::{Anchor, Point};
use crate::paint::Color;

pub use cursor::TextCursor;
pub use image::ImageState;

/// How rectangles and ovals are drawn.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Fill,
    Stroke,
}

/// Font selection: a TrueType file, or the built-in bitmap font when `path`
/// is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub path: Option<PathBuf>,
    pub height: i32,
}

impl FontSpec {
    pub fn builtin(height: i32) -> Self {
        Self { path: None, height }
    }

    pub fn file(path: impl Into<PathBuf>, height: i32) -> Self {
        Self { path: Some(path.into()), height }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::builtin(10)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colors {
    pub clear: Color,
    pub draw: Color,
}

impl Default for Colors {
    fn default() -> Self {
        Self { clear: Color::BLACK, draw: Color::WHITE }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    pub anchor: Anchor,
    pub color: Colors,
    /// Suppresses auto-present and auto-quit.
    pub expert: bool,
    /// `None` until a font is opened.
    pub font: Option<FontSpec>,
    pub grid: bool,
    pub image: ImageState,
    pub pan: Point,
    pub style: Style,
}
