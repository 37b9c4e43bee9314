use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

use crate::audio::{AudioOut, SoundBuffer};
use crate::backend::soft::{SoftFont, SoftTexture};
use crate::backend::{Backend, FontSource, SoftRenderer, Target};
use crate::coords::{Dim, Point, Rect};
use crate::device::GpuInit;
use crate::input::{Event, Modifiers};
use crate::paint::Color;
use crate::time::{Clock, SystemClock};

use super::runtime::WinitState;

/// Window backend configuration.
#[derive(Debug, Clone, Default)]
pub struct WinitConfig {
    pub gpu: GpuInit,
}

/// Desktop backend: a winit window showing the software frame through wgpu.
///
/// The event loop is pumped (never run) so the caller keeps control of the
/// program flow. Must be created on the main thread.
pub struct WinitBackend {
    event_loop: EventLoop<()>,
    state: WinitState,
    clock: SystemClock,
    audio: AudioOut,
}

impl WinitBackend {
    pub fn new(config: WinitConfig) -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let renderer = SoftRenderer::new(Dim::zero())?;

        Ok(Self {
            event_loop,
            state: WinitState::new(config.gpu, renderer),
            clock: SystemClock::new(),
            audio: AudioOut::default(),
        })
    }

    /// Dispatches pending platform events, waiting at most `timeout`.
    fn pump(&mut self, timeout: Option<Duration>) -> Result<()> {
        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(timeout, &mut self.state) {
            log::debug!("window: event loop exited ({code})");
            self.state.closed = true;
        }
        self.state.take_error()
    }

    /// Makes sure the window exists; winit only creates it from inside the loop.
    fn ensure_window(&mut self) -> Result<()> {
        if self.state.entry.is_none() {
            self.pump(Some(Duration::ZERO))?;
        }
        if self.state.entry.is_none() {
            bail!("window was not created");
        }
        Ok(())
    }
}

impl Backend for WinitBackend {
    type Texture = SoftTexture;
    type Font = SoftFont;
    type Sound = SoundBuffer;

    fn set_title(&mut self, title: &str) {
        self.state.title = title.to_owned();
        self.state.with_window(|w| w.set_title(title));
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.visible = visible;
        if visible {
            if let Err(e) = self.ensure_window() {
                log::error!("window: cannot show: {e:#}");
                return;
            }
        }
        self.state.with_window(|w| w.set_visible(visible));
    }

    fn resize_window(&mut self, size: Dim) -> Result<()> {
        self.state.renderer.resize_window(size)?;
        self.state.request_size(size);
        Ok(())
    }

    fn enter_fullscreen(&mut self) -> Result<Dim> {
        self.ensure_window()?;
        let size = self.state.fullscreen()?;
        self.state.renderer.resize_window(size)?;
        Ok(size)
    }

    fn create_canvas(&mut self, size: Dim) -> Result<()> {
        self.state.renderer.create_canvas(size)
    }

    fn set_target(&mut self, target: Target) {
        self.state.renderer.set_target(target);
    }

    fn set_logical_size(&mut self, size: Dim) {
        self.state.scale.logical = size;
    }

    fn set_draw_color(&mut self, color: Color) {
        self.state.renderer.set_draw_color(color);
    }

    fn clear(&mut self) {
        self.state.renderer.clear();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.state.renderer.fill_rect(rect);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.state.renderer.stroke_rect(rect);
    }

    fn fill_oval(&mut self, rect: Rect) {
        self.state.renderer.fill_oval(rect);
    }

    fn stroke_oval(&mut self, rect: Rect) {
        self.state.renderer.stroke_oval(rect);
    }

    fn draw_point(&mut self, p: Point) {
        self.state.renderer.draw_point(p);
    }

    fn draw_line(&mut self, a: Point, b: Point) {
        self.state.renderer.draw_line(a, b);
    }

    fn copy(&mut self, tex: &SoftTexture, src: Option<Rect>, dst: Option<Rect>) {
        self.state.renderer.copy(tex, src, dst);
    }

    fn copy_canvas(&mut self) {
        self.state.renderer.copy_canvas();
    }

    fn present(&mut self) -> Result<()> {
        if !self.state.visible {
            return Ok(());
        }
        self.ensure_window()?;
        self.state.present()
    }

    fn load_texture(&mut self, path: &Path) -> Result<SoftTexture> {
        SoftTexture::load(path)
    }

    fn texture_size(&self, tex: &SoftTexture) -> Dim {
        tex.dim()
    }

    fn open_font(&mut self, source: FontSource<'_>, height: i32) -> Result<SoftFont> {
        match source {
            FontSource::Builtin => SoftFont::builtin(height),
            FontSource::Path(path) => SoftFont::open(path, height),
        }
    }

    fn render_text(&mut self, font: &SoftFont, text: &str, color: Color) -> Result<SoftTexture> {
        self.state.renderer.render_text(font, text, color)
    }

    fn load_sound(&mut self, path: &Path) -> Result<SoundBuffer> {
        SoundBuffer::load(path)
    }

    fn play_sound(&mut self, sound: &SoundBuffer) -> Result<()> {
        self.audio.play(sound)
    }

    fn wait_event(&mut self, timeout: Option<Duration>) -> Result<Option<Event>> {
        let deadline = timeout.map(|t| Instant::now() + t);
        let mut pumped = false;

        loop {
            if let Some(ev) = self.state.queue.pop_front() {
                return Ok(Some(ev));
            }
            if self.state.closed {
                bail!("window event loop has exited");
            }

            let remaining = match deadline {
                Some(d) => {
                    let now = Instant::now();
                    // Even a zero timeout polls the platform once.
                    if now >= d && pumped {
                        return Ok(None);
                    }
                    Some(d.saturating_duration_since(now))
                }
                None => None,
            };
            self.pump(remaining)?;
            pumped = true;
        }
    }

    fn poll_event(&mut self) -> Result<Option<Event>> {
        if self.state.queue.is_empty() && !self.state.closed {
            self.pump(Some(Duration::ZERO))?;
        }
        Ok(self.state.queue.pop_front())
    }

    fn modifiers(&self) -> Modifiers {
        self.state.input.modifiers
    }

    fn ticks(&self) -> Duration {
        self.clock.elapsed()
    }
}
