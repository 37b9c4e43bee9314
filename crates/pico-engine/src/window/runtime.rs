use std::collections::VecDeque;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowId};

use crate::backend::SoftRenderer;
use crate::coords::Dim;
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::{map_modifiers, translate_window_event, PointerScale};
use crate::input::{Event, InputState};

#[self_referencing]
pub(crate) struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Window-side state driven by `pump_app_events`.
///
/// Holds what the window needs while the event loop runs: the renderer
/// (so expose events can repaint), translated events waiting for the core,
/// and the window attributes requested before the window exists.
pub(crate) struct WinitState {
    pub gpu_init: GpuInit,

    pub title: String,
    pub visible: bool,
    pub size: Dim,

    pub entry: Option<WindowEntry>,
    pub renderer: SoftRenderer,
    pub input: InputState,
    pub scale: PointerScale,
    pub queue: VecDeque<Event>,

    /// First failure raised inside a callback; reported by the next backend call.
    pub error: Option<anyhow::Error>,
    pub closed: bool,
}

impl WinitState {
    pub fn new(gpu_init: GpuInit, renderer: SoftRenderer) -> Self {
        Self {
            gpu_init,
            title: String::new(),
            visible: false,
            size: Dim::new(1, 1),
            entry: None,
            renderer,
            input: InputState::default(),
            scale: PointerScale { physical: Dim::zero(), logical: Dim::zero() },
            queue: VecDeque::new(),
            error: None,
            closed: false,
        }
    }

    pub fn take_error(&mut self) -> Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn with_window<R>(&self, f: impl FnOnce(&Window) -> R) -> Option<R> {
        self.entry.as_ref().map(|e| e.with_window(|w| f(w)))
    }

    pub fn request_size(&mut self, size: Dim) {
        self.size = size;
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let target = physical(size);
        let applied = entry.with_window(|w| {
            w.set_fullscreen(None);
            w.request_inner_size(target)
        });
        // Platforms that resize synchronously return the new size right away.
        if let Some(actual) = applied {
            entry.with_gpu_mut(|gpu| gpu.resize(actual));
            self.scale.physical = dim_of(actual);
        }
    }

    /// Switches to borderless fullscreen and returns the monitor size.
    pub fn fullscreen(&mut self) -> Result<Dim> {
        let entry = self.entry.as_mut().context("window not created")?;

        let size = entry.with_window(|w| {
            w.set_fullscreen(Some(Fullscreen::Borderless(None)));
            w.current_monitor().map(|m| m.size()).unwrap_or_else(|| w.inner_size())
        });
        entry.with_gpu_mut(|gpu| gpu.resize(size));

        let dim = dim_of(size);
        self.size = dim;
        self.scale.physical = dim;
        Ok(dim)
    }

    pub fn present(&mut self) -> Result<()> {
        let Some(entry) = self.entry.as_mut() else {
            return Ok(());
        };
        let frame = self.renderer.window();
        entry.with_gpu_mut(|gpu| gpu.present(frame))
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(physical(self.size))
            .with_resizable(false)
            .with_visible(self.visible);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;
        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()?;

        self.scale.physical = entry.with_gpu(|gpu| dim_of(gpu.size()));
        self.entry = Some(entry);
        log::debug!("window: created {}x{}", self.size.w, self.size.h);
        Ok(())
    }

    fn surface_resized(&mut self, size: PhysicalSize<u32>) {
        if let Some(entry) = self.entry.as_mut() {
            entry.with_gpu_mut(|gpu| gpu.resize(size));
            self.scale.physical = dim_of(size);
        }
    }

    fn push(&mut self, ev: Event) {
        self.input.apply_event(&ev);
        self.queue.push_back(ev);
    }
}

impl ApplicationHandler for WinitState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.error.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            log::error!("window: {e:#}");
            self.error = Some(e);
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::ModifiersChanged(m) => {
                self.input.modifiers = map_modifiers(m.state());
            }

            WindowEvent::Resized(size) => self.surface_resized(*size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.with_window(|w| w.inner_size()) {
                    self.surface_resized(size);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.present() {
                    log::error!("window: redraw failed: {e:#}");
                    self.error.get_or_insert(e);
                }
            }

            WindowEvent::Destroyed => {
                self.closed = true;
            }

            _ => {}
        }

        if let Some(ev) = translate_window_event(self.scale, &self.input, &event) {
            self.push(ev);
        }
    }
}

fn physical(size: Dim) -> PhysicalSize<u32> {
    PhysicalSize::new(size.w.max(1) as u32, size.h.max(1) as u32)
}

fn dim_of(size: PhysicalSize<u32>) -> Dim {
    Dim::new(size.width as i32, size.height as i32)
}
