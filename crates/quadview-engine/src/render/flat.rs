use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::mesh::{GpuMesh, Vertex};

use super::{RenderCtx, RenderTarget};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FlatParams {
    view_proj: [[f32; 4]; 4],
    color: [f32; 4],
}

/// Solid-color mesh renderer (the plain-triangle step).
///
/// Vertices are transformed by a view-projection uniform; the fragment color
/// comes from the same uniform block.
#[derive(Default)]
pub struct FlatRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    params_ubo: Option<wgpu::Buffer>,
}

impl FlatRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `mesh` in `color` with the given camera transform.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        mesh: &GpuMesh,
        view_proj: Mat4,
        color: [f32; 4],
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        if let Some(ubo) = self.params_ubo.as_ref() {
            let params = FlatParams {
                view_proj: view_proj.to_cols_array_2d(),
                color,
            };
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&params));
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("quadview flat pass"),
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
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.vertex_buffer().slice(..));
        rpass.set_index_buffer(mesh.index_buffer().slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..mesh.index_count(), 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("quadview flat shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/flat.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("quadview flat bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<FlatParams>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("quadview flat pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("quadview flat pipeline"),
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
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.params_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.params_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let params_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quadview flat params ubo"),
            size: std::mem::size_of::<FlatParams>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadview flat bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: params_ubo.as_entire_binding(),
            }],
        });

        self.params_ubo = Some(params_ubo);
        self.bind_group = Some(bind_group);
    }
}
