use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::backend::soft::Pixmap;

use super::surface;
use super::upload::frame_bytes;
use super::{GpuInit, SurfaceErrorAction};

/// wgpu objects bound to one window.
///
/// The surface is configured with `COPY_DST` so finished CPU frames can be
/// written straight into the swapchain texture.
pub struct Gpu<'w> {
    /// Surface bound to the window; the window must outlive it.
    surface: wgpu::Surface<'w>,

    device: wgpu::Device,
    queue: wgpu::Queue,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to a window.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let GpuInit {
            present_mode,
            alpha_mode,
            force_fallback_adapter,
            desired_maximum_frame_latency,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("pico device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        anyhow::ensure!(
            caps.usages.contains(wgpu::TextureUsages::COPY_DST),
            "surface textures cannot be copied into on this adapter"
        );
        let format = surface::pick_format(&caps.formats)
            .context("surface offers no 8-bit RGBA/BGRA format")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_DST,
            format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode: surface::pick_alpha_mode(&caps.alpha_modes, alpha_mode),
            view_formats: vec![],
            desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);
        log::debug!("gpu: surface {}x{} {:?}", size.width, size.height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Reconfigures the surface after a resize. A zero-sized window leaves
    /// the surface unconfigured until it grows again.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if self.is_zero_sized() {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn is_zero_sized(&self) -> bool {
        self.size.width == 0 || self.size.height == 0
    }

    /// Writes `frame` into the next surface texture and presents it.
    ///
    /// Transient surface errors drop the frame; only fatal ones are returned.
    pub fn present(&mut self, frame: &Pixmap) -> Result<()> {
        if self.is_zero_sized() {
            return Ok(());
        }

        let surface_texture = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(err) => match SurfaceErrorAction::from(&err) {
                SurfaceErrorAction::Reconfigure => {
                    log::debug!("gpu: {err}, reconfiguring");
                    self.surface.configure(&self.device, &self.config);
                    self.surface
                        .get_current_texture()
                        .context("surface lost twice in a row")?
                }
                SurfaceErrorAction::SkipFrame => {
                    log::debug!("gpu: skipping frame");
                    return Ok(());
                }
                SurfaceErrorAction::Fatal => anyhow::bail!("surface out of memory"),
            },
        };

        let tex = &surface_texture.texture;
        let (width, height) = (tex.width(), tex.height());
        let bytes = frame_bytes(frame, width, height, surface::is_bgra(self.config.format));

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &bytes,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(std::iter::empty());
        surface_texture.present();
        Ok(())
    }
}
