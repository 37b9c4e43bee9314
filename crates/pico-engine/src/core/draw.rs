use std::path::Path;

use crate::backend::Backend;
use crate::cache::{AssetCache, LoadMode, Loaded};
use crate::coords::{anchor_pos, anchor_rect, Anchor, Point, Rect};
use crate::state::Style;

use super::error::{PicoError, Result};
use super::Pico;

impl<B: Backend> Pico<B> {
    /// Presents unless expert mode defers it.
    fn auto_present(&mut self) -> Result<()> {
        if self.state.expert {
            return Ok(());
        }
        self.present()
    }

    fn point(&self, p: Point) -> Point {
        anchor_pos(p, Anchor::POINT, self.state.anchor, self.state.pan)
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn draw_pixel(&mut self, pos: Point) -> Result<()> {
        self.ensure_active()?;
        let at = self.point(pos);
        self.backend.draw_point(at);
        self.auto_present()
    }

    /// Draws every point, presenting once.
    pub fn draw_pixels(&mut self, points: &[Point]) -> Result<()> {
        self.ensure_active()?;
        for &p in points {
            let at = self.point(p);
            self.backend.draw_point(at);
        }
        self.auto_present()
    }

    pub fn draw_line(&mut self, a: Point, b: Point) -> Result<()> {
        self.ensure_active()?;
        let (a, b) = (self.point(a), self.point(b));
        self.backend.draw_line(a, b);
        self.auto_present()
    }

    /// `rect` position is interpreted with the current anchor.
    pub fn draw_rect(&mut self, rect: Rect) -> Result<()> {
        self.ensure_active()?;
        let r = anchor_rect(rect, self.state.anchor, self.state.pan);
        match self.state.style {
            Style::Fill => self.backend.fill_rect(r),
            Style::Stroke => self.backend.stroke_rect(r),
        }
        self.auto_present()
    }

    /// Ellipse inscribed in `rect`.
    pub fn draw_oval(&mut self, rect: Rect) -> Result<()> {
        self.ensure_active()?;
        let r = anchor_rect(rect, self.state.anchor, self.state.pan);
        match self.state.style {
            Style::Fill => self.backend.fill_oval(r),
            Style::Stroke => self.backend.stroke_oval(r),
        }
        self.auto_present()
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Renders `text` in the draw color, anchoring its bounding box at `pos`.
    pub fn draw_text(&mut self, pos: Point, text: &str) -> Result<()> {
        self.ensure_active()?;
        let font = self.font.as_ref().ok_or(PicoError::NoFont)?;
        if text.is_empty() {
            return Ok(());
        }

        let tex = self
            .backend
            .render_text(font, text, self.state.color.draw)
            .map_err(PicoError::resource("cannot render text"))?;
        let dim = self.backend.texture_size(&tex);
        let at = anchor_pos(pos, dim, self.state.anchor, self.state.pan);
        self.backend.copy(&tex, None, Some(Rect::from_pos_dim(at, dim)));
        self.auto_present()
    }

    /// Writes `text` at the text cursor and moves the cursor past it.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.ensure_active()?;
        self.put_text(text)?;
        self.auto_present()
    }

    /// Like [`write`](Self::write), then starts a new line. An empty `text`
    /// only advances the line.
    pub fn writeln(&mut self, text: &str) -> Result<()> {
        self.ensure_active()?;
        self.put_text(text)?;
        let line = self.state.font.as_ref().map_or(0, |f| f.height);
        self.cursor.newline(line);
        self.auto_present()
    }

    /// Cursor text is placed by its top-left corner; the anchor does not apply.
    fn put_text(&mut self, text: &str) -> Result<()> {
        let font = self.font.as_ref().ok_or(PicoError::NoFont)?;
        if text.is_empty() {
            return Ok(());
        }

        let tex = self
            .backend
            .render_text(font, text, self.state.color.draw)
            .map_err(PicoError::resource("cannot render text"))?;
        let dim = self.backend.texture_size(&tex);
        let at = self.cursor.pos() - self.state.pan;
        self.backend.copy(&tex, None, Some(Rect::from_pos_dim(at, dim)));
        self.cursor.advance(dim.w);
        Ok(())
    }

    // ── images and sounds ─────────────────────────────────────────────────

    /// Draws the image at `path` (cached), applying the current crop and size.
    pub fn draw_image(&mut self, pos: Point, path: &Path) -> Result<()> {
        self.draw_image_ext(pos, path, LoadMode::Cached)
    }

    pub fn draw_image_ext(&mut self, pos: Point, path: &Path, mode: LoadMode) -> Result<()> {
        self.ensure_active()?;
        let (anchor, pan, image) = (self.state.anchor, self.state.pan, self.state.image);

        let tex = load_texture(&mut self.backend, &mut self.cache, path, mode)?;
        let natural = self.backend.texture_size(&tex);
        let dim = image.target(natural);
        let at = anchor_pos(pos, dim, anchor, pan);
        self.backend.copy(&tex, image.source(natural), Some(Rect::from_pos_dim(at, dim)));
        drop(tex);

        self.auto_present()
    }

    /// Starts playing the sound at `path` (cached) and returns immediately.
    pub fn play_sound(&mut self, path: &Path) -> Result<()> {
        self.play_sound_ext(path, LoadMode::Cached)
    }

    pub fn play_sound_ext(&mut self, path: &Path, mode: LoadMode) -> Result<()> {
        self.ensure_active()?;
        let Self { backend, cache, .. } = self;
        let cache = cache.as_mut().ok_or(PicoError::Inactive)?;

        let what = format!("cannot play {}", path.display());
        match mode {
            LoadMode::Cached => {
                let snd = cache.sound(path, |p| backend.load_sound(p))?;
                backend.play_sound(snd).map_err(PicoError::resource(what))
            }
            LoadMode::Uncached => {
                let snd = backend
                    .load_sound(path)
                    .map_err(PicoError::resource(format!("cannot load sound {}", path.display())))?;
                backend.play_sound(&snd).map_err(PicoError::resource(what))
            }
        }
    }

    // ── clear ─────────────────────────────────────────────────────────────

    /// Fills the canvas with the clear color and restores the draw color.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_active()?;
        self.backend.set_draw_color(self.state.color.clear);
        self.backend.clear();
        self.backend.set_draw_color(self.state.color.draw);
        self.auto_present()
    }
}

pub(super) fn load_texture<'c, B: Backend>(
    backend: &mut B,
    cache: &'c mut Option<AssetCache<B::Texture, B::Sound>>,
    path: &Path,
    mode: LoadMode,
) -> Result<Loaded<'c, B::Texture>> {
    let cache = cache.as_mut().ok_or(PicoError::Inactive)?;
    match mode {
        LoadMode::Cached => Ok(Loaded::Cached(cache.texture(path, |p| backend.load_texture(p))?)),
        LoadMode::Uncached => backend
            .load_texture(path)
            .map(Loaded::Owned)
            .map_err(PicoError::resource(format!("cannot load texture {}", path.display()))),
    }
}
