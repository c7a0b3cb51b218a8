use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::mesh::{GpuMesh, Vertex};
use crate::texture::Texture2d;

use super::{RenderCtx, RenderTarget};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

/// Textured mesh renderer (the textured-quad and camera steps).
///
/// Group 0 holds the camera uniform, group 1 the texture + sampler. The
/// texture bind group is cached per [`Texture2d::id`] so swapping textures
/// between frames does not rebuild group 0.
#[derive(Default)]
pub struct TexturedRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    camera_bgl: Option<wgpu::BindGroupLayout>,
    camera_bg: Option<wgpu::BindGroup>,
    camera_ubo: Option<wgpu::Buffer>,

    texture_bgl: Option<wgpu::BindGroupLayout>,
    texture_bg: Option<(u64, wgpu::BindGroup)>,
}

impl TexturedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `mesh` sampling `texture`, transformed by `view_proj`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        mesh: &GpuMesh,
        texture: &Texture2d,
        view_proj: Mat4,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_camera_bindings(ctx);
        self.ensure_texture_binding(ctx, texture);

        if let Some(ubo) = self.camera_ubo.as_ref() {
            let camera = CameraUniform {
                view_proj: view_proj.to_cols_array_2d(),
            };
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&camera));
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(camera_bg) = self.camera_bg.as_ref() else { return };
        let Some((_, texture_bg)) = self.texture_bg.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("quadview textured pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, camera_bg, &[]);
        rpass.set_bind_group(1, texture_bg, &[]);
        rpass.set_vertex_buffer(0, mesh.vertex_buffer().slice(..));
        rpass.set_index_buffer(mesh.index_buffer().slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..mesh.index_count(), 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("quadview textured shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/textured.wgsl").into()),
        });

        let camera_bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("quadview camera bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<CameraUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let texture_bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("quadview texture bgl"),
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

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("quadview textured pipeline layout"),
                    bind_group_layouts: &[&camera_bgl, &texture_bgl],
                    immediate_size: 0,
                });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("quadview textured pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.camera_bgl = Some(camera_bgl);
        self.texture_bgl = Some(texture_bgl);

        self.camera_bg = None;
        self.camera_ubo = None;
        self.texture_bg = None;
    }

    fn ensure_camera_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.camera_bg.is_some() && self.camera_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.camera_bgl.as_ref() else { return };

        let camera_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quadview camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_bg = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadview camera bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        self.camera_ubo = Some(camera_ubo);
        self.camera_bg = Some(camera_bg);
    }

    fn ensure_texture_binding(&mut self, ctx: &RenderCtx<'_>, texture: &Texture2d) {
        if matches!(self.texture_bg, Some((id, _)) if id == texture.id()) {
            return;
        }
        let Some(bgl) = self.texture_bgl.as_ref() else { return };

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadview texture bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(texture.sampler()),
                },
            ],
        });

        self.texture_bg = Some((texture.id(), bind_group));
    }
}
