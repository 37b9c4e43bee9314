use std::path::Path;
use std::time::Duration;

use crate::backend::{Backend, FontSource};
use crate::cache::{AssetCache, LoadMode};
use crate::coords::{self, Anchor, Dim, Point, Rect};
use crate::paint::Color;
use crate::state::{FontSpec, RenderState, Style, TextCursor};

use super::draw::load_texture;
use super::error::{PicoError, Result};
use super::size::{CanvasSize, LogicalSize, PhysicalSize};
use super::PicoConfig;

/// Drawing context: render state, canvas sizes, font and asset cache on top
/// of a [`Backend`].
///
/// Every operation goes through `&mut self`; there is no global state, so
/// independent contexts can coexist (tests build one per case).
pub struct Pico<B: Backend> {
    pub(super) backend: B,
    pub(super) config: PicoConfig,

    pub(super) state: RenderState,
    pub(super) cursor: TextCursor,
    pub(super) font: Option<B::Font>,

    /// Window size as last set.
    pub(super) physical: Dim,
    /// Canvas size as last set.
    pub(super) logical: Dim,
    /// Logical size restored by the reset gesture.
    pub(super) base_logical: Dim,

    /// `None` while shut down.
    pub(super) cache: Option<AssetCache<B::Texture, B::Sound>>,
    pub(super) visible: bool,
}

impl<B: Backend> Pico<B> {
    /// Creates the context and runs `init(true)`.
    pub fn new(backend: B, config: PicoConfig) -> Result<Self> {
        let mut pico = Self {
            backend,
            config,
            state: RenderState::default(),
            cursor: TextCursor::default(),
            font: None,
            physical: Dim::zero(),
            logical: Dim::zero(),
            base_logical: Dim::zero(),
            cache: None,
            visible: false,
        };
        pico.init(true)?;
        Ok(pico)
    }

    /// `init(true)` resets all state from the config, opens the font, sizes
    /// and clears the canvas. `init(false)` releases the font and every
    /// cached asset and hides the window; other operations then fail with
    /// [`PicoError::Inactive`] until the next `init(true)`.
    pub fn init(&mut self, on: bool) -> Result<()> {
        if !on {
            log::debug!("pico: shutting down ({} cached assets)", self.cache.as_ref().map_or(0, |c| c.len()));
            self.cache = None;
            self.font = None;
            self.visible = false;
            self.backend.set_visible(false);
            return Ok(());
        }

        let cfg = self.config.clone();
        self.state = RenderState {
            expert: cfg.expert,
            grid: cfg.grid,
            ..RenderState::default()
        };
        self.cursor = TextCursor::default();
        self.cache = Some(AssetCache::new(cfg.cache_buckets)?);
        self.font = None;

        self.backend.set_title(&cfg.title);
        self.backend.set_draw_color(self.state.color.draw);
        if let Some(font) = cfg.font {
            self.set_font(font)?;
        }
        self.set_size(PhysicalSize::Exact(cfg.physical), LogicalSize::Exact(cfg.logical))?;
        self.set_show(cfg.visible)?;
        self.clear()?;

        log::debug!("pico: initialized \"{}\"", cfg.title);
        Ok(())
    }

    pub(super) fn ensure_active(&self) -> Result<()> {
        if self.cache.is_none() {
            return Err(PicoError::Inactive);
        }
        Ok(())
    }

    // ── setters ───────────────────────────────────────────────────────────

    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.state.anchor = anchor;
    }

    pub fn set_color_clear(&mut self, color: Color) {
        self.state.color.clear = color;
    }

    pub fn set_color_draw(&mut self, color: Color) {
        self.state.color.draw = color;
        self.backend.set_draw_color(color);
    }

    /// Moves the text cursor; `pos.x` becomes the left margin for `writeln`.
    pub fn set_cursor(&mut self, pos: Point) {
        self.cursor = TextCursor::at(pos);
    }

    pub fn set_expert(&mut self, on: bool) {
        self.state.expert = on;
    }

    /// Opens `spec` and makes it the font for text output.
    ///
    /// The previous font stays active when opening fails.
    pub fn set_font(&mut self, spec: FontSpec) -> Result<()> {
        self.ensure_active()?;

        let source = match &spec.path {
            Some(p) => FontSource::Path(p),
            None => FontSource::Builtin,
        };
        let what = match &spec.path {
            Some(p) => format!("cannot open font {}", p.display()),
            None => "cannot open built-in font".to_string(),
        };
        let font = self
            .backend
            .open_font(source, spec.height)
            .map_err(PicoError::resource(what))?;

        log::debug!("pico: font {:?} at {}px", spec.path, spec.height);
        self.font = Some(font);
        self.state.font = Some(spec);
        Ok(())
    }

    pub fn set_grid(&mut self, on: bool) {
        self.state.grid = on;
    }

    pub fn set_image_crop(&mut self, crop: Rect) {
        self.state.image.crop = crop;
    }

    pub fn set_image_size(&mut self, size: Dim) {
        self.state.image.size = size;
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.state.pan = pan;
    }

    pub fn set_style(&mut self, style: Style) {
        self.state.style = style;
    }

    pub fn set_title(&mut self, title: &str) {
        self.backend.set_title(title);
    }

    // ── getters ───────────────────────────────────────────────────────────

    /// Natural size of the image at `path` (loaded through the cache).
    pub fn get_image_size(&mut self, path: &Path) -> Result<Dim> {
        self.ensure_active()?;
        let tex = load_texture(&mut self.backend, &mut self.cache, path, LoadMode::Cached)?;
        Ok(self.backend.texture_size(&tex))
    }

    pub fn get_size(&self) -> CanvasSize {
        CanvasSize { physical: self.physical, logical: self.logical }
    }

    /// Time since the backend started.
    pub fn get_ticks(&self) -> Duration {
        self.backend.ticks()
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn cursor(&self) -> TextCursor {
        self.cursor
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // ── percent helpers ───────────────────────────────────────────────────

    /// Position at `pct` percent of the logical canvas.
    pub fn pct_to_pos(&self, pct: Point) -> Point {
        coords::pct_to_pos(self.logical, pct)
    }

    /// Position at `pct` percent of `rect`, whose position is interpreted
    /// with the current anchor.
    pub fn pct_to_pos_in(&self, rect: Rect, pct: Point) -> Point {
        coords::pct_to_pos_in(rect, pct, self.state.anchor)
    }
}
