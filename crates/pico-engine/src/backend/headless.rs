//! Backend without a window.
//!
//! Draws into the shared software renderer, reads input from a scripted
//! queue and keeps time with a manual clock, so whole programs can run in
//! tests or on machines without a display.

use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::audio::SoundBuffer;
use crate::coords::{Dim, Point, Rect};
use crate::input::{Event, InputState, Modifiers};
use crate::paint::Color;
use crate::time::{Clock, ManualClock};

use super::soft::{Pixmap, SoftFont, SoftTexture};
use super::{Backend, FontSource, SoftRenderer, Target};

/// Screen size reported when a headless window goes fullscreen.
const DEFAULT_SCREEN: Dim = Dim::new(800, 600);

/// Counters for backend calls worth asserting on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessStats {
    pub texture_loads: usize,
    pub sound_loads: usize,
    pub sounds_played: usize,
    pub font_opens: usize,
    pub presents: usize,
}

#[derive(Debug)]
pub struct HeadlessBackend {
    renderer: SoftRenderer,
    events: VecDeque<Event>,
    input: InputState,
    clock: ManualClock,

    title: String,
    visible: bool,
    fullscreen: bool,
    screen: Dim,
    logical: Dim,

    frame: Option<Pixmap>,
    stats: HeadlessStats,
}

impl HeadlessBackend {
    pub fn new() -> Result<Self> {
        Ok(Self {
            renderer: SoftRenderer::new(Dim::zero())?,
            events: VecDeque::new(),
            input: InputState::default(),
            clock: ManualClock::new(),
            title: String::new(),
            visible: false,
            fullscreen: false,
            screen: DEFAULT_SCREEN,
            logical: Dim::zero(),
            frame: None,
            stats: HeadlessStats::default(),
        })
    }

    /// Sets the size `enter_fullscreen` reports.
    pub fn with_screen(mut self, screen: Dim) -> Self {
        self.screen = screen;
        self
    }

    pub fn set_screen(&mut self, screen: Dim) {
        self.screen = screen;
    }

    /// Queues an event; positions are in logical units.
    pub fn push_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    pub fn push_events(&mut self, evs: impl IntoIterator<Item = Event>) {
        self.events.extend(evs);
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn advance_clock(&mut self, by: Duration) {
        self.clock.advance(by);
    }

    pub fn renderer(&self) -> &SoftRenderer {
        &self.renderer
    }

    /// Window contents at the last `present`.
    pub fn last_frame(&self) -> Option<&Pixmap> {
        self.frame.as_ref()
    }

    pub fn stats(&self) -> HeadlessStats {
        self.stats
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn window_size(&self) -> Dim {
        self.renderer.window().dim()
    }

    pub fn logical_size(&self) -> Dim {
        self.logical
    }

    fn dequeue(&mut self) -> Option<Event> {
        let ev = self.events.pop_front()?;
        self.input.apply_event(&ev);
        Some(ev)
    }
}

impl Backend for HeadlessBackend {
    type Texture = SoftTexture;
    type Font = SoftFont;
    type Sound = SoundBuffer;

    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn resize_window(&mut self, size: Dim) -> Result<()> {
        self.fullscreen = false;
        self.renderer.resize_window(size)
    }

    fn enter_fullscreen(&mut self) -> Result<Dim> {
        self.fullscreen = true;
        self.renderer.resize_window(self.screen)?;
        Ok(self.screen)
    }

    fn create_canvas(&mut self, size: Dim) -> Result<()> {
        self.renderer.create_canvas(size)
    }

    fn set_target(&mut self, target: Target) {
        self.renderer.set_target(target);
    }

    fn set_logical_size(&mut self, size: Dim) {
        self.logical = size;
    }

    fn set_draw_color(&mut self, color: Color) {
        self.renderer.set_draw_color(color);
    }

    fn clear(&mut self) {
        self.renderer.clear();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.renderer.fill_rect(rect);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.renderer.stroke_rect(rect);
    }

    fn fill_oval(&mut self, rect: Rect) {
        self.renderer.fill_oval(rect);
    }

    fn stroke_oval(&mut self, rect: Rect) {
        self.renderer.stroke_oval(rect);
    }

    fn draw_point(&mut self, p: Point) {
        self.renderer.draw_point(p);
    }

    fn draw_line(&mut self, a: Point, b: Point) {
        self.renderer.draw_line(a, b);
    }

    fn copy(&mut self, tex: &SoftTexture, src: Option<Rect>, dst: Option<Rect>) {
        self.renderer.copy(tex, src, dst);
    }

    fn copy_canvas(&mut self) {
        self.renderer.copy_canvas();
    }

    fn present(&mut self) -> Result<()> {
        self.stats.presents += 1;
        self.frame = Some(self.renderer.window().clone());
        Ok(())
    }

    fn load_texture(&mut self, path: &Path) -> Result<SoftTexture> {
        let tex = SoftTexture::load(path)?;
        self.stats.texture_loads += 1;
        Ok(tex)
    }

    fn texture_size(&self, tex: &SoftTexture) -> Dim {
        tex.dim()
    }

    fn open_font(&mut self, source: FontSource<'_>, height: i32) -> Result<SoftFont> {
        let font = match source {
            FontSource::Builtin => SoftFont::builtin(height)?,
            FontSource::Path(path) => SoftFont::open(path, height)?,
        };
        self.stats.font_opens += 1;
        Ok(font)
    }

    fn render_text(&mut self, font: &SoftFont, text: &str, color: Color) -> Result<SoftTexture> {
        self.renderer.render_text(font, text, color)
    }

    fn load_sound(&mut self, path: &Path) -> Result<SoundBuffer> {
        let snd = SoundBuffer::load(path)?;
        self.stats.sound_loads += 1;
        Ok(snd)
    }

    fn play_sound(&mut self, sound: &SoundBuffer) -> Result<()> {
        log::trace!("headless: play {}", sound.path().display());
        self.stats.sounds_played += 1;
        Ok(())
    }

    fn wait_event(&mut self, timeout: Option<Duration>) -> Result<Option<Event>> {
        if let Some(ev) = self.dequeue() {
            return Ok(Some(ev));
        }
        match timeout {
            // Nothing will ever arrive; let the time pass instantly.
            Some(t) => {
                self.clock.advance(t);
                Ok(None)
            }
            None => bail!("headless event queue is exhausted"),
        }
    }

    fn poll_event(&mut self) -> Result<Option<Event>> {
        Ok(self.dequeue())
    }

    fn modifiers(&self) -> Modifiers {
        self.input.modifiers
    }

    fn ticks(&self) -> Duration {
        self.clock.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyEvent};

    fn backend() -> HeadlessBackend {
        let mut b = HeadlessBackend::new().unwrap();
        b.resize_window(Dim::new(4, 4)).unwrap();
        b.create_canvas(Dim::new(2, 2)).unwrap();
        b
    }

    // ── events ────────────────────────────────────────────────────────────

    #[test]
    fn events_come_out_in_order_and_update_modifiers() {
        let mut b = backend();
        b.push_event(Event::KeyDown(KeyEvent::new(Key::Control, Modifiers::CTRL)));
        b.push_event(Event::Quit);

        assert!(matches!(b.poll_event().unwrap(), Some(Event::KeyDown(_))));
        assert!(b.modifiers().ctrl);
        assert_eq!(b.wait_event(None).unwrap(), Some(Event::Quit));
        assert_eq!(b.poll_event().unwrap(), None);
    }

    #[test]
    fn timed_wait_on_empty_queue_advances_clock() {
        let mut b = backend();
        let before = b.ticks();
        assert_eq!(b.wait_event(Some(Duration::from_millis(25))).unwrap(), None);
        assert_eq!(b.ticks() - before, Duration::from_millis(25));
    }

    #[test]
    fn blocking_wait_on_empty_queue_fails() {
        let mut b = backend();
        assert!(b.wait_event(None).is_err());
    }

    // ── window ────────────────────────────────────────────────────────────

    #[test]
    fn fullscreen_uses_screen_size() {
        let mut b = HeadlessBackend::new().unwrap().with_screen(Dim::new(30, 20));
        assert_eq!(b.enter_fullscreen().unwrap(), Dim::new(30, 20));
        assert!(b.is_fullscreen());
        assert_eq!(b.window_size(), Dim::new(30, 20));

        b.resize_window(Dim::new(10, 10)).unwrap();
        assert!(!b.is_fullscreen());
    }

    #[test]
    fn present_snapshots_window() {
        let mut b = backend();
        b.set_target(Target::Window);
        b.set_draw_color(Color::RED);
        b.clear();
        b.present().unwrap();

        b.set_draw_color(Color::BLUE);
        b.clear();

        let frame = b.last_frame().unwrap();
        assert_eq!(frame.get(0, 0), Some(Color::RED));
        assert_eq!(b.stats().presents, 1);
    }

    #[test]
    fn missing_texture_does_not_count_as_loaded() {
        let mut b = backend();
        assert!(b.load_texture(Path::new("/nonexistent/x.png")).is_err());
        assert_eq!(b.stats().texture_loads, 0);
    }
}
