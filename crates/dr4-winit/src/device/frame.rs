/// One acquired swapchain image plus the encoder recording into it.
///
/// Hand it back to [`super::Gpu::submit`] promptly; the next frame cannot be
/// acquired while this one is alive.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
