//! Rectangular plane mesh generation

use super::MeshData;

/// Generate a `width` x `height` rectangle in the XY plane facing +Z
pub fn generate_plane_mesh(width: f32, height: f32) -> MeshData {
    let hw = width / 2.0;
    let hh = height / 2.0;

    let vertices = vec![[-hw, -hh, 0.0], [hw, -hh, 0.0], [hw, hh, 0.0], [-hw, hh, 0.0]];
    let normals = vec![[0.0, 0.0, 1.0]; 4];
    let indices = vec![0, 1, 2, 0, 2, 3];

    (vertices, normals, indices)
}
