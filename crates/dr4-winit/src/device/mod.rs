//! GPU device and presentation surface.
//!
//! Owns the wgpu device, queue and the surface bound to the native window,
//! and hands out one frame per present.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
