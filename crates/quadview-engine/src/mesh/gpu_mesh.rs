use anyhow::Result;
use wgpu::util::DeviceExt;

use super::{Mesh, Vertex};

/// Buffer update policy for a [`GpuMesh`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MeshUsage {
    /// Uploaded once; vertex data never changes.
    Static,
    /// Vertices may be rewritten every frame via [`GpuMesh::update_vertices`].
    Dynamic,
}

/// Vertex + index buffers for one mesh.
///
/// Buffer sizes are fixed at upload; dynamic updates may shrink the drawn
/// range but never grow past the original allocation.
pub struct GpuMesh {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
    vertex_capacity: usize,
    usage: MeshUsage,
}

impl GpuMesh {
    /// Uploads `mesh` to the device.
    pub fn upload(device: &wgpu::Device, mesh: &Mesh, usage: MeshUsage) -> Result<Self> {
        anyhow::ensure!(!mesh.vertices.is_empty(), "mesh has no vertices");
        anyhow::ensure!(mesh.is_valid(), "mesh indices out of range");

        let vbo_usage = match usage {
            MeshUsage::Static => wgpu::BufferUsages::VERTEX,
            MeshUsage::Dynamic => wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        };

        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadview mesh vbo"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: vbo_usage,
        });

        let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadview mesh ibo"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            vbo,
            ibo,
            index_count: mesh.indices.len() as u32,
            vertex_capacity: mesh.vertices.len(),
            usage,
        })
    }

    /// Rewrites the vertex buffer contents of a dynamic mesh.
    ///
    /// `vertices` must not exceed the capacity allocated at upload time.
    pub fn update_vertices(&self, queue: &wgpu::Queue, vertices: &[Vertex]) -> Result<()> {
        anyhow::ensure!(
            self.usage == MeshUsage::Dynamic,
            "update_vertices on a static mesh"
        );
        anyhow::ensure!(
            vertices.len() <= self.vertex_capacity,
            "vertex update ({}) exceeds buffer capacity ({})",
            vertices.len(),
            self.vertex_capacity
        );

        queue.write_buffer(&self.vbo, 0, bytemuck::cast_slice(vertices));
        Ok(())
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vbo
    }

    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.ibo
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}
