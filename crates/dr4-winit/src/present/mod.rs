//! Presentation of the CPU back buffer.
//!
//! Each present uploads the window's [`crate::canvas::Canvas`] into a GPU
//! texture and draws it over the whole surface with one fullscreen triangle.

mod blit;
mod ctx;

pub use blit::{present_canvas, BlitRenderer};
pub use ctx::{RenderCtx, RenderTarget};
