use dr4::{Backend, Plugin, PluginVersion};

use crate::config::BackendConfig;
use crate::window::RenderWindow;

pub const BACKEND_NAME: &str = "dr4-winit";
pub const BACKEND_DESCRIPTION: &str =
    "DR4 backend drawing on the CPU with fontdue text, presented through winit and wgpu";

/// Plugin entry of this crate. Every window it creates shares its config.
#[derive(Debug, Clone, Default)]
pub struct WinitBackend {
    config: BackendConfig,
}

impl WinitBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BackendConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

/// Version of this crate as reported to hosts.
pub fn crate_version() -> PluginVersion {
    let part = |s: &str| s.parse().unwrap_or(0);
    PluginVersion::new(
        part(env!("CARGO_PKG_VERSION_MAJOR")),
        part(env!("CARGO_PKG_VERSION_MINOR")),
        part(env!("CARGO_PKG_VERSION_PATCH")),
    )
}

impl Plugin for WinitBackend {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    fn description(&self) -> &str {
        BACKEND_DESCRIPTION
    }

    fn version(&self) -> PluginVersion {
        crate_version()
    }

    fn dependencies(&self) -> Vec<String> {
        Vec::new()
    }

    fn is_compatible_with(&self, _other: &dyn Plugin) -> bool {
        true
    }
}

impl Backend for WinitBackend {
    fn create_window(&self) -> Box<dyn dr4::Window> {
        log::debug!("creating window");
        Box::new(RenderWindow::new(
            self.config.window.clone(),
            self.config.gpu.clone(),
        ))
    }
}

/// Host-facing constructor.
pub fn create_backend() -> Box<dyn Backend> {
    Box::new(WinitBackend::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowConfig;
    use dr4::Vec2f;

    #[test]
    fn metadata() {
        let b = create_backend();
        assert_eq!(b.name(), "dr4-winit");
        assert!(!b.description().is_empty());
        assert!(b.dependencies().is_empty());
        assert_eq!(b.version().to_string(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn compatible_with_anything() {
        let a = WinitBackend::new();
        let b = create_backend();
        assert!(a.is_compatible_with(b.as_ref()));
        assert!(b.is_compatible_with(&a));
    }

    #[test]
    fn windows_start_closed_with_configured_size() {
        let backend = WinitBackend::with_config(BackendConfig {
            window: WindowConfig {
                title: "cfg".into(),
                size: Vec2f::new(320.0, 200.0),
            },
            ..Default::default()
        });
        let w = backend.create_window();
        assert!(!w.is_open());
        assert_eq!(w.title(), "cfg");
        assert_eq!(w.size(), Vec2f::new(320.0, 200.0));
    }

    #[test]
    fn default_window_is_720_by_480() {
        let w = create_backend().create_window();
        assert_eq!(w.size(), Vec2f::new(720.0, 480.0));
    }
}
