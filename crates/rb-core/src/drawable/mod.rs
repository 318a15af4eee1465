//! Drawable descriptors
//!
//! Each item kind is drawn as a fixed set of primitive parts in item-local
//! space (Y up, front facing +Z). The room shell is described by one
//! rectangle per face. Renderers turn both into triangles with
//! [`DrawPart::mesh`] and [`SurfaceDescriptor::mesh`].

mod catalog;

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::constants::{CEILING_COLOR, DISC_SEGMENTS, FLOOR_COLOR};
use crate::item::ItemKind;
use crate::primitive::{
    MeshData, generate_box_mesh, generate_cylinder_mesh, generate_disc_mesh, generate_plane_mesh,
};
use crate::room::{RoomConfig, Surface, Wall};

/// Primitive shape of a part
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Box with [width, height, depth]
    Box { size: [f32; 3] },
    /// Cylinder along local Y
    Cylinder { radius: f32, height: f32 },
    /// Filled circle in local XY facing +Z
    Disc { radius: f32 },
    /// Rectangle in local XY facing +Z
    Plane { width: f32, height: f32 },
}

impl Shape {
    /// Generate the shape's mesh centered on the origin
    pub fn mesh(&self) -> MeshData {
        match *self {
            Shape::Box { size } => generate_box_mesh(size),
            Shape::Cylinder { radius, height } => generate_cylinder_mesh(radius, height),
            Shape::Disc { radius } => generate_disc_mesh(radius, DISC_SEGMENTS),
            Shape::Plane { width, height } => generate_plane_mesh(width, height),
        }
    }
}

/// One colored primitive of an item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPart {
    pub shape: Shape,
    /// Offset from the item origin
    pub offset: [f32; 3],
    /// Euler rotation (XYZ order) applied before the offset
    pub rotation: [f32; 3],
    /// sRGB color
    pub color: [u8; 3],
    /// Visible from both sides (flat shapes)
    pub double_sided: bool,
}

impl DrawPart {
    const fn new(shape: Shape, offset: [f32; 3], color: u32) -> Self {
        Self {
            shape,
            offset,
            rotation: [0.0; 3],
            color: [(color >> 16) as u8, (color >> 8) as u8, color as u8],
            double_sided: false,
        }
    }

    const fn rotated(mut self, rotation: [f32; 3]) -> Self {
        self.rotation = rotation;
        self
    }

    const fn two_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Transform from part space to item space
    pub fn local_transform(&self) -> Mat4 {
        let [rx, ry, rz] = self.rotation;
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, rx, ry, rz),
            Vec3::from_array(self.offset),
        )
    }

    pub fn mesh(&self) -> MeshData {
        self.shape.mesh()
    }
}

/// Parts making up an item kind
pub fn item_parts(kind: ItemKind) -> &'static [DrawPart] {
    match kind {
        ItemKind::Chair => catalog::CHAIR,
        ItemKind::Table => catalog::TABLE,
        ItemKind::Dresser => catalog::DRESSER,
        ItemKind::Sofa => catalog::SOFA,
        ItemKind::Bed => catalog::BED,
        ItemKind::Rug => catalog::RUG,
        ItemKind::Bookshelf => catalog::BOOKSHELF,
        ItemKind::FloorLamp => catalog::FLOOR_LAMP,
        ItemKind::DeskWithMonitor => catalog::DESK_WITH_MONITOR,
        ItemKind::Painting => catalog::PAINTING,
        ItemKind::Poster => catalog::POSTER,
        ItemKind::Pillar => catalog::PILLAR,
        ItemKind::Clock => catalog::CLOCK,
    }
}

/// Transform from item space to world space
pub fn item_transform(position: Vec3, rotation: Vec3) -> Mat4 {
    Mat4::from_rotation_translation(
        Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z),
        position,
    )
}

/// Axis-aligned bounds (min, max) of all parts of a kind, in item space
pub fn item_local_bounds(kind: ItemKind) -> (Vec3, Vec3) {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);

    for part in item_parts(kind) {
        let transform = part.local_transform();
        let (vertices, _, _) = part.mesh();
        for v in vertices {
            let p = transform.transform_point3(Vec3::from_array(v));
            min = min.min(p);
            max = max.max(p);
        }
    }

    (min, max)
}

/// One rectangular face of the room shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDescriptor {
    pub surface: Surface,
    pub center: Vec3,
    /// Unit normal pointing into the room
    pub normal: Vec3,
    pub width: f32,
    pub height: f32,
    /// sRGB color
    pub color: [u8; 3],
}

impl SurfaceDescriptor {
    /// Transform from plane space (XY, facing +Z) to world space
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_arc(Vec3::Z, self.normal), self.center)
    }

    pub fn mesh(&self) -> MeshData {
        generate_plane_mesh(self.width, self.height)
    }
}

/// Floor, ceiling and the four walls for the current room
pub fn room_shell(room: &RoomConfig) -> Vec<SurfaceDescriptor> {
    let edge = room.edge();
    let half = room.half();
    let wall_color = room.wall_color().rgb();

    let mut shell = vec![
        SurfaceDescriptor {
            surface: Surface::Floor,
            center: Vec3::ZERO,
            normal: Vec3::Y,
            width: edge,
            height: edge,
            color: FLOOR_COLOR,
        },
        SurfaceDescriptor {
            surface: Surface::Ceiling,
            center: Vec3::new(0.0, edge, 0.0),
            normal: Vec3::NEG_Y,
            width: edge,
            height: edge,
            color: CEILING_COLOR,
        },
    ];

    shell.extend(Wall::ALL.into_iter().map(|wall| {
        let normal = wall.inward_normal();
        SurfaceDescriptor {
            surface: Surface::Wall(wall),
            center: Vec3::new(0.0, half, 0.0) - normal * half,
            normal,
            width: edge,
            height: edge,
            color: wall_color,
        }
    }));

    shell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{RoomSize, WallColor};

    #[test]
    fn test_every_kind_has_parts() {
        for kind in ItemKind::ALL {
            assert!(!item_parts(kind).is_empty(), "{kind}");
            let (min, max) = item_local_bounds(kind);
            assert!(min.cmple(max).all(), "{kind}");
        }
    }

    #[test]
    fn test_items_rest_on_floor() {
        for kind in ItemKind::ALL {
            let (min, _) = item_local_bounds(kind);
            assert!(min.y >= -1e-4, "{kind} reaches below its origin: {}", min.y);
        }
    }

    #[test]
    fn test_wall_items_face_forward() {
        // Wall items hang from their back face, which sits near z = 0
        for kind in ItemKind::ALL.into_iter().filter(|k| k.is_wall_mounted()) {
            let (min, max) = item_local_bounds(kind);
            assert!(max.z > 0.0 && min.z < 0.0, "{kind}");
        }
    }

    #[test]
    fn test_rug_is_flat_and_two_sided() {
        let (min, max) = item_local_bounds(ItemKind::Rug);
        assert!((max.y - min.y).abs() < 1e-5);
        assert!((max.x - min.x - 3.0).abs() < 1e-5);
        assert!((max.z - min.z - 2.0).abs() < 1e-5);
        assert!(item_parts(ItemKind::Rug)[0].double_sided);
    }

    #[test]
    fn test_room_shell_layout() {
        let room = RoomConfig::new(RoomSize::Small, "#336699".parse::<WallColor>().unwrap());
        let shell = room_shell(&room);
        assert_eq!(shell.len(), 6);

        for face in &shell {
            // Plane normal maps onto the inward normal
            let n = face.transform().transform_vector3(Vec3::Z);
            assert!((n - face.normal).length() < 1e-5);
        }

        let south = shell
            .iter()
            .find(|f| f.surface == Surface::Wall(Wall::South))
            .unwrap();
        assert_eq!(south.center, Vec3::new(0.0, 4.0, -4.0));
        assert_eq!(south.color, [0x33, 0x66, 0x99]);

        let ceiling = shell.iter().find(|f| f.surface == Surface::Ceiling).unwrap();
        assert_eq!(ceiling.center.y, 8.0);
    }
}
