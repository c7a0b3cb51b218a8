use bytemuck::{Pod, Zeroable};

/// Vertex with position and texture coordinates.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(pos: [f32; 3], uv: [f32; 2]) -> Self {
        Self { pos, uv }
    }

    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 12);
    }
}
