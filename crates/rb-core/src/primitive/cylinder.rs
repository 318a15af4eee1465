//! Cylinder mesh generation (with end caps)

use std::f32::consts::TAU;

use super::MeshData;

/// Generate a cylinder mesh along the Y axis
///
/// # Arguments
/// * `radius` - Cylinder radius
/// * `height` - Cylinder height along Y
///
/// # Returns
/// (vertices, normals, indices)
pub fn generate_cylinder_mesh(radius: f32, height: f32) -> MeshData {
    use crate::constants::CYLINDER_SEGMENTS;
    generate_cylinder_mesh_with_segments(radius, height, CYLINDER_SEGMENTS)
}

/// Generate a cylinder mesh with custom segment count
pub fn generate_cylinder_mesh_with_segments(radius: f32, height: f32, segments: u32) -> MeshData {
    let half_height = height / 2.0;
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Generate side vertices
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * TAU;
        let nx = theta.sin();
        let nz = theta.cos();

        // Bottom vertex
        vertices.push([radius * nx, -half_height, radius * nz]);
        normals.push([nx, 0.0, nz]);

        // Top vertex
        vertices.push([radius * nx, half_height, radius * nz]);
        normals.push([nx, 0.0, nz]);
    }

    // Side triangles
    for i in 0..segments {
        let base = i * 2;
        // Triangle 1
        indices.push(base);
        indices.push(base + 2);
        indices.push(base + 1);
        // Triangle 2
        indices.push(base + 1);
        indices.push(base + 2);
        indices.push(base + 3);
    }

    // Top cap center
    let top_center_idx = vertices.len() as u32;
    vertices.push([0.0, half_height, 0.0]);
    normals.push([0.0, 1.0, 0.0]);

    // Top cap rim vertices
    let top_rim_start = vertices.len() as u32;
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * TAU;
        vertices.push([radius * theta.sin(), half_height, radius * theta.cos()]);
        normals.push([0.0, 1.0, 0.0]);
    }

    // Top cap triangles
    for i in 0..segments {
        indices.push(top_center_idx);
        indices.push(top_rim_start + i);
        indices.push(top_rim_start + i + 1);
    }

    // Bottom cap center
    let bottom_center_idx = vertices.len() as u32;
    vertices.push([0.0, -half_height, 0.0]);
    normals.push([0.0, -1.0, 0.0]);

    // Bottom cap rim vertices
    let bottom_rim_start = vertices.len() as u32;
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * TAU;
        vertices.push([radius * theta.sin(), -half_height, radius * theta.cos()]);
        normals.push([0.0, -1.0, 0.0]);
    }

    // Bottom cap triangles (reversed winding)
    for i in 0..segments {
        indices.push(bottom_center_idx);
        indices.push(bottom_rim_start + i + 1);
        indices.push(bottom_rim_start + i);
    }

    (vertices, normals, indices)
}
