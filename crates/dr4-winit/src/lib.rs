//! DR4 backend on winit + wgpu.
//!
//! Drawables rasterize on the CPU into [`canvas::Canvas`] surfaces; text is
//! shaped and rasterized with `fontdue`. A [`RenderWindow`] owns the native
//! window and presents its back buffer through wgpu.
//!
//! Hosts obtain the backend through [`create_backend`]:
//!
//! ```no_run
//! let backend = dr4_winit::create_backend();
//! let mut window = backend.create_window();
//! window.open().expect("no display");
//! ```

pub mod canvas;
pub mod device;
pub mod input;
pub mod logging;
pub mod present;
pub mod shapes;
pub mod text;

mod backend;
mod config;
mod image;
mod texture;
mod window;

pub use backend::{create_backend, crate_version, WinitBackend, BACKEND_DESCRIPTION, BACKEND_NAME};
pub use config::{BackendConfig, WindowConfig, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
pub use image::Image;
pub use texture::{Texture, MIN_TEXTURE_SIZE};
pub use window::RenderWindow;
