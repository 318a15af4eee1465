//! Disc (filled circle) mesh generation

use std::f32::consts::TAU;

use super::MeshData;

/// Generate a disc in the XY plane facing +Z
pub fn generate_disc_mesh(radius: f32, segments: u32) -> MeshData {
    let mut vertices = Vec::with_capacity(segments as usize + 2);
    let mut normals = Vec::with_capacity(segments as usize + 2);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    vertices.push([0.0, 0.0, 0.0]);
    normals.push([0.0, 0.0, 1.0]);

    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * TAU;
        vertices.push([radius * theta.cos(), radius * theta.sin(), 0.0]);
        normals.push([0.0, 0.0, 1.0]);
    }

    for i in 1..=segments {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    (vertices, normals, indices)
}
