//! Box (rectangular prism) mesh generation

use glam::Vec3;

use super::MeshData;

/// Generate a box of `size` = [x, y, z] centered on the origin
///
/// Every face gets its own four vertices so normals stay flat; triangles wind
/// counter-clockwise seen from outside.
pub fn generate_box_mesh(size: [f32; 3]) -> MeshData {
    let half = Vec3::from(size) * 0.5;
    let axes = [Vec3::X, Vec3::Y, Vec3::Z];

    let mut vertices = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for axis in 0..3 {
        for sign in [1.0, -1.0] {
            let normal = axes[axis] * sign;
            let mut u = axes[(axis + 1) % 3] * half;
            let mut v = axes[(axis + 2) % 3] * half;
            if sign < 0.0 {
                std::mem::swap(&mut u, &mut v);
            }
            let center = normal * half;

            let base = vertices.len() as u32;
            for corner in [center - u - v, center + u - v, center + u + v, center - u + v] {
                vertices.push(corner.to_array());
                normals.push(normal.to_array());
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    (vertices, normals, indices)
}
