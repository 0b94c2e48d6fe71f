use dr4::Vec2f;

use crate::device::GpuInit;

pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 480.0;

/// Initial window parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Logical size the window starts with.
    pub size: Vec2f,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            size: Vec2f::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        }
    }
}

/// Everything a [`crate::WinitBackend`] hands to the windows it creates.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    pub window: WindowConfig,
    pub gpu: GpuInit,
}
