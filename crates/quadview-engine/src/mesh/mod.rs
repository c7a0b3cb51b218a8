//! Mesh data and GPU upload.
//!
//! CPU-side `Mesh` (vertices + u16 indices) plus `GpuMesh` buffers. Built-in
//! geometry covers exactly what the viewer steps draw: the classic triangle
//! and a unit quad with texture coordinates.

mod gpu_mesh;
mod vertex;

pub use gpu_mesh::{GpuMesh, MeshUsage};
pub use vertex::Vertex;

/// CPU-side indexed mesh.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u16>) -> Self {
        Self { vertices, indices }
    }

    /// True when every index refers to an existing vertex.
    pub fn is_valid(&self) -> bool {
        let n = self.vertices.len();
        self.indices.iter().all(|&i| (i as usize) < n)
    }

    /// The plain triangle: apex up, centered, in the xy plane.
    pub fn triangle() -> Self {
        Self::new(
            vec![
                Vertex::new([0.0, 0.5, 0.0], [0.5, 0.0]),
                Vertex::new([0.5, -0.5, 0.0], [1.0, 1.0]),
                Vertex::new([-0.5, -0.5, 0.0], [0.0, 1.0]),
            ],
            vec![0, 1, 2],
        )
    }

    /// Unit quad centered at the origin in the xy plane.
    ///
    /// UVs put the image top-left at the quad's top-left corner (image v runs
    /// downward).
    pub fn unit_quad() -> Self {
        Self::new(
            vec![
                Vertex::new([-0.5, 0.5, 0.0], [0.0, 0.0]),
                Vertex::new([0.5, 0.5, 0.0], [1.0, 0.0]),
                Vertex::new([0.5, -0.5, 0.0], [1.0, 1.0]),
                Vertex::new([-0.5, -0.5, 0.0], [0.0, 1.0]),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    /// `unit_quad` scaled by `s` around the origin.
    pub fn scaled_quad(s: f32) -> Self {
        let mut mesh = Self::unit_quad();
        for v in &mut mesh.vertices {
            v.pos[0] *= s;
            v.pos[1] *= s;
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_meshes_are_valid() {
        assert!(Mesh::triangle().is_valid());
        assert!(Mesh::unit_quad().is_valid());
    }

    #[test]
    fn out_of_range_index_is_invalid() {
        let mesh = Mesh::new(vec![Vertex::new([0.0; 3], [0.0; 2])], vec![0, 1]);
        assert!(!mesh.is_valid());
    }

    #[test]
    fn quad_is_two_triangles() {
        let quad = Mesh::unit_quad();
        assert_eq!(quad.vertices.len(), 4);
        assert_eq!(quad.indices.len(), 6);
    }

    #[test]
    fn scaled_quad_scales_positions_not_uvs() {
        let quad = Mesh::scaled_quad(2.0);
        assert_eq!(quad.vertices[0].pos, [-1.0, 1.0, 0.0]);
        assert_eq!(quad.vertices[0].uv, [0.0, 0.0]);
    }
}
