//! Render passes: the textured lit cubes and the flat-color lamp markers.

/// Instanced textured cube pass with Phong lighting.
pub mod cube;
/// Flat-color lamp markers at the point-light positions.
pub mod lamp;

pub use cube::CubeRenderer;
pub use lamp::LampRenderer;

/// Cube mesh vertex: position, normal, texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Face normal.
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

/// The canonical unit cube: six faces, two triangles each, with outward
/// normals and per-face UVs.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn cube_vertices() -> Vec<CubeVertex> {
    let raw: [([f32; 3], [f32; 3], [f32; 2]); 36] = [
        // back face (-Z)
        ([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
        ([0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
        ([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
        ([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
        ([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
        ([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
        // front face (+Z)
        ([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
        ([0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
        ([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
        ([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
        ([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
        ([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
        // left face (-X)
        ([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
        ([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
        ([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
        ([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
        ([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
        ([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
        // right face (+X)
        ([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
        ([0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
        ([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
        ([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
        ([0.5, -0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
        ([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
        // bottom face (-Y)
        ([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
        ([0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
        ([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
        ([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
        ([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
        ([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
        // top face (+Y)
        ([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
        ([0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
        ([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
        ([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
        ([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
        ([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
    ];

    raw.iter()
        .map(|&(position, normal, uv)| CubeVertex {
            position,
            normal,
            uv,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn cube_has_36_vertices_with_unit_normals() {
        let vertices = cube_vertices();
        assert_eq!(vertices.len(), 36);
        for v in &vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            // Normals are axis-aligned and point away from the origin side
            // their face sits on.
            let p = Vec3::from_array(v.position);
            assert!(p.dot(n) > 0.0);
        }
    }

    #[test]
    fn uvs_stay_in_unit_square() {
        for v in cube_vertices() {
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
        }
    }
}
