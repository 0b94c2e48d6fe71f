use crate::canvas::Canvas;
use crate::device::{Gpu, SurfaceErrorAction};

use super::{RenderCtx, RenderTarget};

const BACK_BUFFER_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Draws an uploaded canvas scaled to fit the render target.
///
/// The canvas keeps its aspect ratio; while the surface and back buffer
/// disagree (mid-resize) the uncovered strips show the target's letterbox
/// color.
///
/// GPU objects are created on first use and rebuilt only when the surface
/// format or the canvas size changes.
#[derive(Default)]
pub struct BlitRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    sampler: Option<wgpu::Sampler>,

    texture: Option<wgpu::Texture>,
    texture_size: (u32, u32),
    bind_group: Option<wgpu::BindGroup>,
}

impl BlitRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, canvas: &Canvas) {
        let (width, height) = (canvas.width(), canvas.height());
        if width == 0 || height == 0 {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_sampler(ctx);
        self.ensure_texture(ctx, width, height);
        self.ensure_bindings(ctx);
        self.upload(ctx, canvas);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("dr4-winit blit pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(target.letterbox),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if let Some([x, y, w, h]) = fit_viewport((width, height), ctx.surface_size) {
            rpass.set_viewport(x, y, w, h, 0.0, 1.0);
        }
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    fn upload(&self, ctx: &RenderCtx<'_>, canvas: &Canvas) {
        let Some(texture) = self.texture.as_ref() else { return };
        let (width, height) = (canvas.width(), canvas.height());

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            canvas.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("dr4-winit blit shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("dr4-winit blit bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("dr4-winit blit pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("dr4-winit blit pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("dr4-winit blit sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_texture(&mut self, ctx: &RenderCtx<'_>, width: u32, height: u32) {
        if self.texture.is_some() && self.texture_size == (width, height) {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("dr4-winit back buffer"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: BACK_BUFFER_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        log::debug!("back buffer texture {width}x{height}");

        self.texture = Some(texture);
        self.texture_size = (width, height);
        self.bind_group = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(texture) = self.texture.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("dr4-winit blit bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        }));
    }
}

/// Acquires a frame, blits `canvas` into it and presents.
///
/// On failure the returned action says whether presenting can continue.
pub fn present_canvas(
    gpu: &mut Gpu<'_>,
    blit: &mut BlitRenderer,
    canvas: &Canvas,
) -> Result<(), SurfaceErrorAction> {
    if !gpu.can_present() {
        return Err(SurfaceErrorAction::SkipFrame);
    }

    let mut frame = match gpu.begin_frame() {
        Ok(frame) => frame,
        Err(err) => return Err(gpu.handle_surface_error(err)),
    };

    {
        let size = gpu.size();
        let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), (size.width, size.height));
        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        blit.render(&ctx, &mut target, canvas);
    }

    gpu.submit(frame);
    Ok(())
}

/// Largest centered rectangle with the canvas' aspect ratio inside the
/// surface, as `[x, y, width, height]`. `None` for empty sizes.
fn fit_viewport(canvas: (u32, u32), surface: (u32, u32)) -> Option<[f32; 4]> {
    if canvas.0 == 0 || canvas.1 == 0 || surface.0 == 0 || surface.1 == 0 {
        return None;
    }
    let (cw, ch) = (canvas.0 as f32, canvas.1 as f32);
    let (sw, sh) = (surface.0 as f32, surface.1 as f32);
    let scale = (sw / cw).min(sh / ch);
    let (w, h) = (cw * scale, ch * scale);
    Some([(sw - w) / 2.0, (sh - h) / 2.0, w, h])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_aspect_fills_surface() {
        // 2x HiDPI: logical canvas, physical surface.
        assert_eq!(fit_viewport((720, 480), (1440, 960)), Some([0.0, 0.0, 1440.0, 960.0]));
    }

    #[test]
    fn wider_surface_is_pillarboxed() {
        assert_eq!(fit_viewport((100, 100), (300, 100)), Some([100.0, 0.0, 100.0, 100.0]));
    }

    #[test]
    fn taller_surface_is_letterboxed() {
        assert_eq!(fit_viewport((200, 100), (200, 300)), Some([0.0, 100.0, 200.0, 100.0]));
    }

    #[test]
    fn empty_sizes_have_no_viewport() {
        assert_eq!(fit_viewport((0, 10), (100, 100)), None);
        assert_eq!(fit_viewport((10, 10), (100, 0)), None);
    }
}
