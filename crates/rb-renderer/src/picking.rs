//! Pointer picking
//!
//! Casts a world-space ray against the placed items and the room shell and
//! reports the hit as a [`HitTarget`] the scene can route. Items are tested
//! against their local bounding box in item space, shell faces against
//! their rectangle.

use glam::Vec3;
use rb_core::{HitTarget, SceneSnapshot, item_local_bounds, item_transform, room_shell};

use crate::bounds::BoundingBox;

/// Extra thickness around item bounds so flat items stay clickable
const ITEM_PICK_MARGIN: f32 = 0.01;

/// Tolerance on the edges of shell faces
const SURFACE_EDGE_EPSILON: f32 = 1e-4;

/// Nearest object under the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// World-space intersection point
    pub point: Vec3,
    /// What was hit
    pub target: HitTarget,
    /// Distance along the ray
    pub distance: f32,
}

/// Ray-plane intersection test.
///
/// Only front faces count: the ray must travel against `plane_normal`.
/// Returns the ray parameter of the hit.
pub fn ray_plane_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<f32> {
    let denom = ray_dir.dot(plane_normal);

    // Parallel, or hitting the back side
    if denom > -1e-6 {
        return None;
    }

    let t = (plane_point - ray_origin).dot(plane_normal) / denom;
    (t >= 0.0).then_some(t)
}

/// Find what the pointer ray hits.
///
/// The nearest item wins; the shell face under the ray is only reported
/// when no item is hit. `ray_dir` should be normalized so that
/// [`PickHit::distance`] is a world distance.
pub fn pick(snapshot: &SceneSnapshot, ray_origin: Vec3, ray_dir: Vec3) -> Option<PickHit> {
    pick_item(snapshot, ray_origin, ray_dir).or_else(|| pick_surface(snapshot, ray_origin, ray_dir))
}

fn nearest(hits: impl Iterator<Item = PickHit>) -> Option<PickHit> {
    hits.min_by(|a, b| a.distance.total_cmp(&b.distance))
}

fn pick_item(snapshot: &SceneSnapshot, ray_origin: Vec3, ray_dir: Vec3) -> Option<PickHit> {
    nearest(snapshot.items.iter().filter_map(|item| {
        let to_local = item_transform(item.position, item.rotation).inverse();
        let local_origin = to_local.transform_point3(ray_origin);
        let local_dir = to_local.transform_vector3(ray_dir);

        let bounds = BoundingBox::from(item_local_bounds(item.kind)).inflated(ITEM_PICK_MARGIN);
        let t = bounds.ray_intersection(local_origin, local_dir)?;
        Some(PickHit {
            point: ray_origin + ray_dir * t,
            target: HitTarget::Item(item.index),
            distance: t,
        })
    }))
}

fn pick_surface(snapshot: &SceneSnapshot, ray_origin: Vec3, ray_dir: Vec3) -> Option<PickHit> {
    nearest(room_shell(&snapshot.room).into_iter().filter_map(|face| {
        let t = ray_plane_intersection(ray_origin, ray_dir, face.center, face.normal)?;
        let point = ray_origin + ray_dir * t;
        let local = face.transform().inverse().transform_point3(point);
        let inside = local.x.abs() <= face.width / 2.0 + SURFACE_EDGE_EPSILON
            && local.y.abs() <= face.height / 2.0 + SURFACE_EDGE_EPSILON;
        inside.then_some(PickHit {
            point,
            target: HitTarget::Surface(face.surface),
            distance: t,
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rb_core::{ItemKind, RoomConfig, RoomSize, SceneState, Surface, Wall, WallColor};

    fn scene() -> SceneState {
        SceneState::new(RoomConfig::new(RoomSize::Medium, WallColor::default()))
    }

    #[test]
    fn test_ray_plane_front_face_only() {
        let origin = Vec3::new(0.0, 5.0, 0.0);
        let t = ray_plane_intersection(origin, Vec3::NEG_Y, Vec3::ZERO, Vec3::Y).unwrap();
        assert_relative_eq!(t, 5.0);

        // From below the floor
        let below = Vec3::new(0.0, -1.0, 0.0);
        assert!(ray_plane_intersection(below, Vec3::Y, Vec3::ZERO, Vec3::Y).is_none());
        // Parallel
        assert!(ray_plane_intersection(origin, Vec3::X, Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn test_pick_floor() {
        let snapshot = scene().snapshot();
        let hit = pick(&snapshot, Vec3::new(1.0, 3.0, 2.0), Vec3::NEG_Y).unwrap();
        assert_eq!(hit.target, HitTarget::Surface(Surface::Floor));
        assert_relative_eq!(hit.point.x, 1.0);
        assert_relative_eq!(hit.point.y, 0.0);
        assert_relative_eq!(hit.point.z, 2.0);
    }

    #[test]
    fn test_pick_walls_and_ceiling() {
        let snapshot = scene().snapshot();
        let origin = Vec3::new(0.0, 2.0, 0.0);

        let south = pick(&snapshot, origin, Vec3::NEG_Z).unwrap();
        assert_eq!(south.target, HitTarget::Surface(Surface::Wall(Wall::South)));
        assert_relative_eq!(south.point.z, -5.0);

        let east = pick(&snapshot, origin, Vec3::X).unwrap();
        assert_eq!(east.target, HitTarget::Surface(Surface::Wall(Wall::East)));

        let up = pick(&snapshot, origin, Vec3::Y).unwrap();
        assert_eq!(up.target, HitTarget::Surface(Surface::Ceiling));
        assert_relative_eq!(up.distance, 8.0);
    }

    #[test]
    fn test_item_in_front_of_floor_wins() {
        let mut scene = scene();
        scene.arm(ItemKind::Table);
        scene.place_at(Vec3::new(2.0, 0.0, 0.0));

        let hit = pick(&scene.snapshot(), Vec3::new(2.0, 4.0, 0.0), Vec3::NEG_Y).unwrap();
        assert_eq!(hit.target, HitTarget::Item(0));
        assert!(hit.point.y > 0.0);
    }

    #[test]
    fn test_rotated_item_bounds_follow_yaw() {
        let mut scene = scene();
        scene.arm(ItemKind::Bed);
        scene.place_at(Vec3::ZERO);
        let (min, max) = item_local_bounds(ItemKind::Bed);
        let long_half = (max.z - min.z).max(max.x - min.x) / 2.0;

        // Just past the short side but inside the long side
        let probe = |scene: &SceneState| {
            let origin = Vec3::new(long_half - 0.1, 5.0, 0.0);
            pick(&scene.snapshot(), origin, Vec3::NEG_Y).map(|h| h.target)
        };
        let before = probe(&scene);

        scene.select(0);
        scene.rotate_selected(rb_core::RotateDirection::Left);
        scene.rotate_selected(rb_core::RotateDirection::Left);
        let after = probe(&scene);

        assert_ne!(before, after);
    }

    #[test]
    fn test_rug_is_pickable() {
        let mut scene = scene();
        scene.arm(ItemKind::Rug);
        scene.place_at(Vec3::new(-2.0, 0.0, -2.0));

        let hit = pick(&scene.snapshot(), Vec3::new(-2.0, 3.0, -2.0), Vec3::NEG_Y).unwrap();
        assert_eq!(hit.target, HitTarget::Item(0));
    }

    #[test]
    fn test_ray_leaving_room_hits_nothing() {
        let snapshot = scene().snapshot();
        assert!(pick(&snapshot, Vec3::new(0.0, 2.0, 20.0), Vec3::Z).is_none());
    }
}
