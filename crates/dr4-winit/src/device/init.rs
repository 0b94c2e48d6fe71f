/// Settings for the device that presents window back buffers.
///
/// Drawing happens on the CPU, so the GPU only uploads and blits one texture
/// per frame; the defaults ask for the least capable adapter that can do that.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Adapter preference.
    ///
    /// One textured triangle per frame does not need a discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Retry with a software adapter when no hardware adapter fits.
    ///
    /// Keeps headless CI and remote desktops able to open windows.
    pub allow_fallback_adapter: bool,

    /// Prefer an sRGB surface format when the adapter offers one.
    ///
    /// The back buffer holds sRGB-encoded colors, so an sRGB surface shows them
    /// unchanged.
    pub prefer_srgb: bool,

    /// Requested present mode. Falls back to `Fifo` when unsupported.
    ///
    /// FIFO also paces hosts that call `display` in a tight loop.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode. Falls back to the first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Limits requested from the adapter/device.
    ///
    /// `max_texture_dimension_2d` bounds the largest window.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::LowPower,
            allow_fallback_adapter: true,
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_a_low_power_vsynced_surface() {
        let init = GpuInit::default();
        assert_eq!(init.power_preference, wgpu::PowerPreference::LowPower);
        assert!(init.allow_fallback_adapter);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(init.alpha_mode, None);
    }
}
