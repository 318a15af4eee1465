//! Camera containment
//!
//! The camera position is owned by the renderer; once per frame it is
//! clamped into the room volume and aimed back at the room center.

use glam::Vec3;

use crate::constants::{CAMERA_VERTICAL_MARGIN, CAMERA_WALL_MARGIN};
use crate::room::RoomConfig;

/// Camera position and look-at target after containment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

/// Axis-aligned box the camera position is clamped into
pub fn camera_bounds(room: &RoomConfig) -> (Vec3, Vec3) {
    let reach = room.half() - CAMERA_WALL_MARGIN;
    let min = Vec3::new(-reach, CAMERA_VERTICAL_MARGIN, -reach);
    let max = Vec3::new(reach, room.edge() - CAMERA_VERTICAL_MARGIN, reach);
    (min, max)
}

/// Clamp a camera position into the room and look at the room center
pub fn constrain_camera(position: Vec3, room: &RoomConfig) -> CameraPose {
    let (min, max) = camera_bounds(room);
    // f32::clamp panics when lo > hi
    let clamp = |v: f32, lo: f32, hi: f32| hi.min(lo.max(v));

    CameraPose {
        position: Vec3::new(
            clamp(position.x, min.x, max.x),
            clamp(position.y, min.y, max.y),
            clamp(position.z, min.z, max.z),
        ),
        target: Vec3::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{RoomSize, WallColor};

    #[test]
    fn test_start_position_is_pulled_inside() {
        let room = RoomConfig::default();
        let pose = constrain_camera(Vec3::new(0.0, 5.0, 12.0), &room);
        assert_eq!(pose.position.x, 0.0);
        assert_eq!(pose.position.y, 5.0);
        assert!((pose.position.z - 4.9).abs() < 1e-6);
        assert_eq!(pose.target, Vec3::ZERO);
    }

    #[test]
    fn test_bounds_hold_for_every_size() {
        let probes = [
            Vec3::new(100.0, 100.0, 100.0),
            Vec3::new(-100.0, -100.0, -100.0),
            Vec3::new(0.3, 0.2, -0.7),
            Vec3::new(-3.9, 20.0, 7.45),
        ];
        for size in RoomSize::ALL {
            let room = RoomConfig::new(size, WallColor::default());
            let half = room.half();
            for probe in probes {
                let p = constrain_camera(probe, &room).position;
                assert!(p.x >= -half + 0.1 - 1e-6 && p.x <= half - 0.1 + 1e-6);
                assert!(p.z >= -half + 0.1 - 1e-6 && p.z <= half - 0.1 + 1e-6);
                assert!(p.y >= 1.0 && p.y <= room.edge() - 1.0);
            }
        }
    }

    #[test]
    fn test_inside_position_is_untouched() {
        let room = RoomConfig::default();
        let inside = Vec3::new(1.0, 2.0, -3.0);
        assert_eq!(constrain_camera(inside, &room).position, inside);
    }
}
