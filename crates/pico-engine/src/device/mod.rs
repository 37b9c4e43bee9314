//! GPU device + surface management.
//!
//! The window backend rasterizes on the CPU; this layer only owns the wgpu
//! objects needed to get a finished frame onto the window surface:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - uploading a frame into the next surface texture and presenting it

mod error;
mod gpu;
mod init;
mod surface;
mod upload;

pub use error::SurfaceErrorAction;
pub use gpu::Gpu;
pub use init::GpuInit;
