//! Screen projection
//!
//! Projects a [`SceneMesh`] through the camera into 2D triangles in paint
//! order. The camera always sits inside the convex room, so once back faces
//! are culled the shell faces never overlap and are painted first as they
//! come. Item triangles are already clipped to the room volume, so nothing
//! of them lies behind a shell face; they are painted back to front.

use glam::{Vec2, Vec3, Vec4};

use crate::camera::Camera;
use crate::clip::clip_polygon;
use crate::tessellate::{SceneMesh, ShadedTriangle};

/// A filled triangle in viewport pixels (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    /// Corner positions
    pub points: [Vec2; 3],
    /// sRGB color with alpha
    pub color: [u8; 4],
}

/// Project the scene into screen triangles, in the order they should be
/// painted
pub fn project_scene(mesh: &SceneMesh, camera: &Camera, viewport: Vec2) -> Vec<ScreenTriangle> {
    let projector = Projector::new(camera, viewport);
    let mut out = Vec::with_capacity(mesh.triangle_count());

    for tri in &mesh.shell {
        projector.project(tri, &mut out);
    }

    let mut items: Vec<(f32, &ShadedTriangle)> = mesh
        .items
        .iter()
        .filter(|tri| projector.is_visible(tri))
        .map(|tri| (projector.depth(tri.centroid()), tri))
        .collect();
    items.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (_, tri) in items {
        projector.project(tri, &mut out);
    }

    out
}

struct Projector<'a> {
    camera: &'a Camera,
    view: glam::Mat4,
    projection: glam::Mat4,
    viewport: Vec2,
}

impl<'a> Projector<'a> {
    fn new(camera: &'a Camera, viewport: Vec2) -> Self {
        Self {
            camera,
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            viewport,
        }
    }

    fn is_visible(&self, tri: &ShadedTriangle) -> bool {
        tri.double_sided || (tri.vertices[0] - self.camera.position).dot(tri.normal) < 0.0
    }

    /// Distance in front of the camera
    fn depth(&self, point: Vec3) -> f32 {
        -self.view.transform_point3(point).z
    }

    fn project(&self, tri: &ShadedTriangle, out: &mut Vec<ScreenTriangle>) {
        if !self.is_visible(tri) {
            return;
        }

        let view = tri.vertices.map(|v| self.view.transform_point3(v));
        let polygon = clip_near(&view, self.camera.near);
        if polygon.len() < 3 {
            return;
        }

        let screen: Vec<Vec2> = polygon.iter().map(|&v| self.to_screen(v)).collect();
        for i in 1..screen.len() - 1 {
            out.push(ScreenTriangle {
                points: [screen[0], screen[i], screen[i + 1]],
                color: tri.color,
            });
        }
    }

    fn to_screen(&self, view_point: Vec3) -> Vec2 {
        let clip = self.projection * Vec4::new(view_point.x, view_point.y, view_point.z, 1.0);
        let ndc = clip.truncate() / clip.w;
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        )
    }
}

/// Clip a view-space triangle against the near plane (z = -near).
///
/// Returns the visible polygon, with zero, three or four corners.
fn clip_near(triangle: &[Vec3; 3], near: f32) -> Vec<Vec3> {
    clip_polygon(triangle, Vec3::Z, -near)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CameraConfig, RendererConfig};
    use approx::assert_relative_eq;
    use rb_core::{ItemKind, RoomConfig, RoomSize, SceneState, WallColor};

    fn tri(vertices: [Vec3; 3], double_sided: bool) -> ShadedTriangle {
        let [a, b, c] = vertices;
        ShadedTriangle {
            vertices,
            normal: (b - a).cross(c - a).normalize(),
            color: [255, 0, 0, 255],
            double_sided,
        }
    }

    fn camera_at_origin() -> Camera {
        let room = RoomConfig::new(RoomSize::Medium, WallColor::default());
        let mut camera = Camera::new(&room, &CameraConfig::default(), 1.0);
        camera.target = Vec3::new(0.0, 0.0, -1.0);
        camera.position = Vec3::ZERO;
        camera
    }

    #[test]
    fn test_clip_near_keeps_front_triangle() {
        let tri = [Vec3::new(0.0, 0.0, -2.0), Vec3::new(1.0, 0.0, -2.0), Vec3::new(0.0, 1.0, -2.0)];
        assert_eq!(clip_near(&tri, 0.1), tri.to_vec());
    }

    #[test]
    fn test_clip_near_drops_triangle_behind() {
        let tri = [Vec3::new(0.0, 0.0, 2.0), Vec3::new(1.0, 0.0, 2.0), Vec3::new(0.0, 1.0, 2.0)];
        assert!(clip_near(&tri, 0.1).is_empty());
    }

    #[test]
    fn test_clip_near_splits_straddling_triangle() {
        let tri = [Vec3::new(0.0, 0.0, -2.0), Vec3::new(1.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 2.0)];
        let polygon = clip_near(&tri, 0.1);
        assert_eq!(polygon.len(), 4);
        assert!(polygon.iter().all(|v| v.z <= -0.1 + 1e-6));
    }

    #[test]
    fn test_center_projects_to_viewport_center() {
        let camera = camera_at_origin();
        let mesh = SceneMesh {
            shell: vec![tri(
                [
                    Vec3::new(-1.0, -1.0, -5.0),
                    Vec3::new(1.0, -1.0, -5.0),
                    Vec3::new(0.0, 1.0, -5.0),
                ],
                false,
            )],
            items: Vec::new(),
        };

        let out = project_scene(&mesh, &camera, Vec2::new(200.0, 100.0));
        assert_eq!(out.len(), 1);
        let [a, b, c] = out[0].points;
        assert_relative_eq!(a.y, b.y, epsilon = 1e-3);
        assert!(c.y < a.y, "screen y grows downwards");
        assert_relative_eq!((a.x + b.x) / 2.0, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_back_faces_are_culled() {
        let camera = camera_at_origin();
        // Clockwise as seen from the camera
        let back = [
            Vec3::new(-1.0, -1.0, -5.0),
            Vec3::new(0.0, 1.0, -5.0),
            Vec3::new(1.0, -1.0, -5.0),
        ];
        let mesh = SceneMesh {
            shell: Vec::new(),
            items: vec![tri(back, false), tri(back, true)],
        };

        let out = project_scene(&mesh, &camera, Vec2::new(100.0, 100.0));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_items_painted_back_to_front() {
        let camera = camera_at_origin();
        let at = |z: f32, color: u8| ShadedTriangle {
            color: [color, 0, 0, 255],
            ..tri(
                [Vec3::new(-1.0, -1.0, z), Vec3::new(1.0, -1.0, z), Vec3::new(0.0, 1.0, z)],
                false,
            )
        };
        let mesh = SceneMesh {
            shell: Vec::new(),
            items: vec![at(-2.0, 1), at(-8.0, 2), at(-4.0, 3)],
        };

        let order: Vec<u8> = project_scene(&mesh, &camera, Vec2::new(100.0, 100.0))
            .iter()
            .map(|t| t.color[0])
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_room_view_from_constrained_camera() {
        let room = RoomConfig::new(RoomSize::Medium, WallColor::default());
        let mut scene = SceneState::new(room);
        scene.arm(ItemKind::Sofa);
        scene.place_at(glam::Vec3::ZERO);

        let mut camera = Camera::new(&room, &CameraConfig::default(), 1.0);
        camera.apply_constraint(&room);

        let mesh = SceneMesh::build(&scene.snapshot(), &RendererConfig::default());
        let out = project_scene(&mesh, &camera, Vec2::new(640.0, 640.0));

        // The wall behind the camera is culled, the sofa is in view
        assert!(!out.is_empty());
        assert!(out.len() < mesh.triangle_count() * 2);
        assert!(out.iter().all(|t| t.points.iter().all(|p| p.is_finite())));
    }
}
