//! CPU renderer shared by the headless and windowed backends.
//!
//! Holds two pixmaps: the window frame (physical pixels) and the off-screen
//! canvas (logical pixels). Draw primitives blend the current draw color into
//! whichever one is the active [`Target`]; `clear` replaces pixels outright.

mod builtin;
mod font;
mod pixmap;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};

use crate::coords::{Dim, Point, Rect};
use crate::paint::Color;

use super::Target;

pub use font::SoftFont;
pub use pixmap::Pixmap;

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Texture owned by the caller. `id` is unique per process and identifies the
/// allocation (clones keep it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftTexture {
    id: u64,
    pixmap: Pixmap,
}

impl SoftTexture {
    pub fn new(pixmap: Pixmap) -> Self {
        Self { id: NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed), pixmap }
    }

    /// Decodes an image file into RGBA.
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("cannot load image {}", path.display()))?
            .to_rgba8();
        let dim = Dim::new(img.width() as i32, img.height() as i32);
        let pixels = img.pixels().map(|p| Color::from(p.0)).collect();
        Ok(Self::new(Pixmap::from_pixels(dim, pixels)?))
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn dim(&self) -> Dim {
        self.pixmap.dim()
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

/// Software implementation of the renderer half of [`Backend`](super::Backend).
#[derive(Debug)]
pub struct SoftRenderer {
    window: Pixmap,
    canvas: Pixmap,
    target: Target,
    color: Color,
}

impl SoftRenderer {
    pub fn new(window: Dim) -> Result<Self> {
        Ok(Self {
            window: Pixmap::new(window)?,
            canvas: Pixmap::new(Dim::zero())?,
            target: Target::Canvas,
            color: Color::WHITE,
        })
    }

    #[inline]
    pub fn window(&self) -> &Pixmap {
        &self.window
    }

    #[inline]
    pub fn canvas(&self) -> &Pixmap {
        &self.canvas
    }

    #[inline]
    pub fn target(&self) -> Target {
        self.target
    }

    #[inline]
    pub fn draw_color(&self) -> Color {
        self.color
    }

    #[inline]
    fn surface(&mut self) -> &mut Pixmap {
        match self.target {
            Target::Window => &mut self.window,
            Target::Canvas => &mut self.canvas,
        }
    }

    /// Reallocates the window frame; contents are cleared.
    pub fn resize_window(&mut self, size: Dim) -> Result<()> {
        self.window = Pixmap::new(size)?;
        Ok(())
    }

    pub fn create_canvas(&mut self, size: Dim) -> Result<()> {
        self.canvas = Pixmap::new(size)?;
        Ok(())
    }

    pub fn set_target(&mut self, target: Target) {
        self.target = target;
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn clear(&mut self) {
        let c = self.color;
        self.surface().fill(c);
    }

    pub fn fill_rect(&mut self, rect: Rect) {
        let c = self.color;
        self.surface().fill_rect(rect, c);
    }

    pub fn stroke_rect(&mut self, rect: Rect) {
        let c = self.color;
        self.surface().stroke_rect(rect, c);
    }

    pub fn fill_oval(&mut self, rect: Rect) {
        let c = self.color;
        self.surface().fill_oval(rect, c);
    }

    pub fn stroke_oval(&mut self, rect: Rect) {
        let c = self.color;
        self.surface().stroke_oval(rect, c);
    }

    pub fn draw_point(&mut self, p: Point) {
        let c = self.color;
        self.surface().blend(p.x, p.y, c);
    }

    pub fn draw_line(&mut self, a: Point, b: Point) {
        let c = self.color;
        self.surface().line(a, b, c);
    }

    pub fn copy(&mut self, tex: &SoftTexture, src: Option<Rect>, dst: Option<Rect>) {
        let src = src.unwrap_or_else(|| tex.pixmap.bounds());
        let surface = self.surface();
        let dst = dst.unwrap_or_else(|| surface.bounds());
        surface.draw_pixmap(&tex.pixmap, src, dst);
    }

    /// Scales the canvas onto the window frame.
    pub fn copy_canvas(&mut self) {
        match self.target {
            Target::Window => {
                let (src, dst) = (self.canvas.bounds(), self.window.bounds());
                self.window.draw_pixmap(&self.canvas, src, dst);
            }
            Target::Canvas => log::warn!("copy_canvas with the canvas as target ignored"),
        }
    }

    pub fn render_text(&self, font: &SoftFont, text: &str, color: Color) -> Result<SoftTexture> {
        Ok(SoftTexture::new(font.render(text, color)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> SoftRenderer {
        let mut r = SoftRenderer::new(Dim::new(20, 20)).unwrap();
        r.create_canvas(Dim::new(10, 10)).unwrap();
        r
    }

    #[test]
    fn draws_go_to_selected_target() {
        let mut r = renderer();
        r.set_draw_color(Color::RED);
        r.draw_point(Point::new(1, 1));
        assert_eq!(r.canvas().get(1, 1), Some(Color::RED));
        assert_eq!(r.window().get(1, 1), Some(Color::TRANSPARENT));

        r.set_target(Target::Window);
        r.set_draw_color(Color::BLUE);
        r.draw_point(Point::new(1, 1));
        assert_eq!(r.window().get(1, 1), Some(Color::BLUE));
    }

    #[test]
    fn copy_canvas_scales_to_window() {
        let mut r = renderer();
        r.set_draw_color(Color::GREEN);
        r.draw_point(Point::new(9, 9));

        r.set_target(Target::Window);
        r.copy_canvas();
        assert_eq!(r.window().get(18, 18), Some(Color::GREEN));
        assert_eq!(r.window().get(19, 19), Some(Color::GREEN));
        assert_eq!(r.window().get(17, 17), Some(Color::TRANSPARENT));
    }

    #[test]
    fn texture_ids_are_unique() {
        let a = SoftTexture::new(Pixmap::new(Dim::new(1, 1)).unwrap());
        let b = SoftTexture::new(Pixmap::new(Dim::new(1, 1)).unwrap());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn copy_places_texture_at_destination() {
        let mut r = renderer();
        let mut px = Pixmap::new(Dim::new(2, 2)).unwrap();
        px.fill(Color::YELLOW);
        let tex = SoftTexture::new(px);

        r.copy(&tex, None, Some(Rect::new(3, 4, 2, 2)));
        assert_eq!(r.canvas().get(3, 4), Some(Color::YELLOW));
        assert_eq!(r.canvas().get(4, 5), Some(Color::YELLOW));
        assert_eq!(r.canvas().get(5, 5), Some(Color::TRANSPARENT));
    }
}
