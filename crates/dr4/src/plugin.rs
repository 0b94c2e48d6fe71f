use std::fmt;

use crate::window::Window;

/// Semantic version reported by a plugin.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PluginVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PluginVersion {
    #[inline]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Metadata every host-discoverable plugin reports.
pub trait Plugin {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn version(&self) -> PluginVersion;
    /// Names of plugins that must be loaded before this one.
    fn dependencies(&self) -> Vec<String>;
    fn is_compatible_with(&self, other: &dyn Plugin) -> bool;
}

/// Rendering backend plugin.
pub trait Backend: Plugin {
    /// Creates a closed window; call [`Window::open`] to show it.
    fn create_window(&self) -> Box<dyn Window>;
}
