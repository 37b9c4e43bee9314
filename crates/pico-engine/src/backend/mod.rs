//! Backend contract: the window / renderer / font / audio / event surface the
//! core drives.
//!
//! Two implementations ship with the crate:
//! - [`HeadlessBackend`]: software raster, scripted events, manual clock.
//! - [`WinitBackend`](crate::window::WinitBackend): the same raster shown in a
//!   winit window through a wgpu surface.
//!
//! Both share [`SoftRenderer`] for drawing, textures and text.

mod headless;
pub mod soft;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use crate::coords::{Dim, Point, Rect};
use crate::input::{Event, Modifiers};
use crate::paint::Color;

pub use headless::{HeadlessBackend, HeadlessStats};
pub use soft::SoftRenderer;

/// Render target selected with [`Backend::set_target`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Target {
    /// The window, addressed in physical pixels.
    Window,
    /// The off-screen logical canvas created by [`Backend::create_canvas`].
    Canvas,
}

/// Where a font comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FontSource<'a> {
    /// Font compiled into the backend.
    Builtin,
    /// TrueType/OpenType file.
    Path(&'a Path),
}

/// Primitive operations consumed by the core.
///
/// Drawing calls act on the current [`Target`] with the current draw color.
/// Resources (`Texture`, `Font`, `Sound`) are released by dropping them.
///
/// Pointer positions in delivered events are in logical canvas units, as set
/// by [`Backend::set_logical_size`].
pub trait Backend {
    type Texture;
    type Font;
    type Sound;

    // ── window ────────────────────────────────────────────────────────────

    fn set_title(&mut self, title: &str);
    fn set_visible(&mut self, visible: bool);
    /// Resizes the window, leaving fullscreen if needed.
    fn resize_window(&mut self, size: Dim) -> Result<()>;
    /// Enters fullscreen and returns the resulting window size.
    fn enter_fullscreen(&mut self) -> Result<Dim>;

    // ── renderer ──────────────────────────────────────────────────────────

    /// (Re)allocates the off-screen canvas, cleared to transparent.
    fn create_canvas(&mut self, size: Dim) -> Result<()>;
    fn set_target(&mut self, target: Target);
    /// Resolution input events are reported in.
    fn set_logical_size(&mut self, size: Dim);
    fn set_draw_color(&mut self, color: Color);
    /// Fills the whole target with the draw color.
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
    fn fill_oval(&mut self, rect: Rect);
    fn stroke_oval(&mut self, rect: Rect);
    fn draw_point(&mut self, p: Point);
    fn draw_line(&mut self, a: Point, b: Point);
    /// Copies (a region of) `tex` into (a region of) the target, scaling and
    /// alpha-blending. `None` means the whole texture / whole target.
    fn copy(&mut self, tex: &Self::Texture, src: Option<Rect>, dst: Option<Rect>);
    /// Copies the canvas onto the whole current target.
    fn copy_canvas(&mut self);
    /// Shows the window contents.
    fn present(&mut self) -> Result<()>;

    // ── textures / fonts / sounds ─────────────────────────────────────────

    fn load_texture(&mut self, path: &Path) -> Result<Self::Texture>;
    fn texture_size(&self, tex: &Self::Texture) -> Dim;
    fn open_font(&mut self, source: FontSource<'_>, height: i32) -> Result<Self::Font>;
    /// Rasterizes `text` into a new texture of its natural size.
    fn render_text(&mut self, font: &Self::Font, text: &str, color: Color) -> Result<Self::Texture>;
    fn load_sound(&mut self, path: &Path) -> Result<Self::Sound>;
    fn play_sound(&mut self, sound: &Self::Sound) -> Result<()>;

    // ── events / time ─────────────────────────────────────────────────────

    /// Waits for the next event. `None` timeout waits indefinitely.
    ///
    /// Returns `Ok(None)` when the timeout elapsed without an event, and an
    /// error when the event source is gone.
    fn wait_event(&mut self, timeout: Option<Duration>) -> Result<Option<Event>>;
    /// Returns a queued event without waiting.
    fn poll_event(&mut self) -> Result<Option<Event>>;
    /// Modifier keys currently held.
    fn modifiers(&self) -> Modifiers;
    /// Time since the backend was created.
    fn ticks(&self) -> Duration;
}
