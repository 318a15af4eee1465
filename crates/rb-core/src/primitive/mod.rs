//! Primitive mesh generation for item and room geometry
//!
//! All shapes are centered on the local origin, Y up:
//! - Box (rectangular prism)
//! - Cylinder along Y (with end caps)
//! - Disc in the XY plane facing +Z
//! - Plane (rectangle) in the XY plane facing +Z

mod box_mesh;
mod cylinder;
mod disc;
mod plane;

pub use box_mesh::generate_box_mesh;
pub use cylinder::{generate_cylinder_mesh, generate_cylinder_mesh_with_segments};
pub use disc::generate_disc_mesh;
pub use plane::generate_plane_mesh;

/// Mesh data: vertices, normals, and triangle indices
pub type MeshData = (Vec<[f32; 3]>, Vec<[f32; 3]>, Vec<u32>);

#[cfg(test)]
mod tests {
    use super::*;

    fn extents(vertices: &[[f32; 3]]) -> [f32; 3] {
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for v in vertices {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }
        [max[0] - min[0], max[1] - min[1], max[2] - min[2]]
    }

    #[test]
    fn test_box_mesh() {
        let (vertices, normals, indices) = generate_box_mesh([1.0, 1.0, 1.0]);
        assert_eq!(vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(normals.len(), 24);
        assert_eq!(indices.len(), 36); // 6 faces * 2 triangles * 3 indices
    }

    #[test]
    fn test_box_dimensions() {
        let (vertices, _, _) = generate_box_mesh([2.0, 4.0, 6.0]);
        let size = extents(&vertices);
        assert!((size[0] - 2.0).abs() < 0.001);
        assert!((size[1] - 4.0).abs() < 0.001);
        assert!((size[2] - 6.0).abs() < 0.001);
    }

    #[test]
    fn test_cylinder_runs_along_y() {
        let (vertices, normals, indices) = generate_cylinder_mesh(0.05, 0.5);
        assert_eq!(vertices.len(), normals.len());
        assert!(indices.len() % 3 == 0);
        let size = extents(&vertices);
        assert!((size[1] - 0.5).abs() < 0.001);
        assert!((size[0] - 0.1).abs() < 0.001);
    }

    #[test]
    fn test_flat_shapes_face_z() {
        let (vertices, normals, indices) = generate_disc_mesh(0.6, 32);
        assert_eq!(vertices.len(), 34);
        assert_eq!(indices.len(), 32 * 3);
        assert!(normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));

        let (vertices, normals, indices) = generate_plane_mesh(3.0, 2.0);
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
        assert!(normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
        let size = extents(&vertices);
        assert_eq!(size, [3.0, 2.0, 0.0]);
    }
}
