//! Scene tessellation
//!
//! Turns a [`SceneSnapshot`] into world-space triangles with a flat-shaded
//! color per face. The room shell and the items are kept apart because the
//! projector paints them in different ways. Item triangles are clipped to
//! the room volume, so anything sticking out through a wall or the floor is
//! cut away.

use glam::{Mat4, Vec3};
use rb_core::{SceneSnapshot, item_parts, item_transform, room_shell};

use crate::clip::clip_to_box;
use crate::config::RendererConfig;
use crate::light::DirectionalLight;

/// One world-space triangle ready for projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedTriangle {
    /// Corners in counter-clockwise order seen from the front
    pub vertices: [Vec3; 3],
    /// Unit face normal
    pub normal: Vec3,
    /// Shaded sRGB color with alpha
    pub color: [u8; 4],
    /// Skip back-face culling
    pub double_sided: bool,
}

impl ShadedTriangle {
    /// Average of the three corners
    pub fn centroid(&self) -> Vec3 {
        (self.vertices[0] + self.vertices[1] + self.vertices[2]) / 3.0
    }
}

/// Triangles for one frame
#[derive(Debug, Clone, Default)]
pub struct SceneMesh {
    /// Floor, ceiling and walls
    pub shell: Vec<ShadedTriangle>,
    /// Placed items
    pub items: Vec<ShadedTriangle>,
}

impl SceneMesh {
    /// Tessellate the room shell and every placed item
    pub fn build(snapshot: &SceneSnapshot, config: &RendererConfig) -> Self {
        let light = DirectionalLight::for_room(&snapshot.room, &config.lighting);
        let mut mesh = SceneMesh::default();

        for face in room_shell(&snapshot.room) {
            let color = shade_color(face.color, None);
            append_triangles(
                &mut mesh.shell,
                face.mesh(),
                face.transform(),
                color,
                false,
                &light,
            );
        }

        let viewport = &config.viewport;
        let mut items = Vec::new();
        for item in &snapshot.items {
            let highlight = snapshot
                .is_selected(item.index)
                .then_some((viewport.highlight_color, viewport.highlight_strength));
            let to_world = item_transform(item.position, item.rotation);

            for part in item_parts(item.kind) {
                append_triangles(
                    &mut items,
                    part.mesh(),
                    to_world * part.local_transform(),
                    shade_color(part.color, highlight),
                    part.double_sided,
                    &light,
                );
            }
        }

        let half = snapshot.room.half();
        let min = Vec3::new(-half, 0.0, -half);
        let max = Vec3::new(half, snapshot.room.edge(), half);
        mesh.items = items
            .iter()
            .flat_map(|tri| clip_triangle(tri, min, max))
            .collect();

        mesh
    }

    /// Total number of triangles
    pub fn triangle_count(&self) -> usize {
        self.shell.len() + self.items.len()
    }
}

/// Base color in [0, 1] with the optional selection tint blended in
fn shade_color(rgb: [u8; 3], highlight: Option<([f32; 3], f32)>) -> Vec3 {
    let base = Vec3::from_array(rgb.map(|c| c as f32 / 255.0));
    match highlight {
        Some((tint, strength)) => base.lerp(Vec3::from_array(tint), strength.clamp(0.0, 1.0)),
        None => base,
    }
}

/// Clip a triangle to a box and fan the remaining polygon back into triangles
fn clip_triangle(tri: &ShadedTriangle, min: Vec3, max: Vec3) -> Vec<ShadedTriangle> {
    let polygon = clip_to_box(&tri.vertices, min, max);
    (1..polygon.len().saturating_sub(1))
        .map(|i| ShadedTriangle {
            vertices: [polygon[0], polygon[i], polygon[i + 1]],
            ..*tri
        })
        .collect()
}

fn append_triangles(
    out: &mut Vec<ShadedTriangle>,
    (vertices, _normals, indices): rb_core::primitive::MeshData,
    transform: Mat4,
    color: Vec3,
    double_sided: bool,
    light: &DirectionalLight,
) {
    let world: Vec<Vec3> = vertices
        .iter()
        .map(|v| transform.transform_point3(Vec3::from_array(*v)))
        .collect();

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [0, 1, 2].map(|i| world[tri[i] as usize]);
        let normal = (b - a).cross(c - a).normalize_or_zero();
        if normal == Vec3::ZERO {
            continue;
        }

        let lit = (color * light.shade(normal)).clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
        out.push(ShadedTriangle {
            vertices: [a, b, c],
            normal,
            color: [lit.x.round() as u8, lit.y.round() as u8, lit.z.round() as u8, 255],
            double_sided,
        });
    }
}
