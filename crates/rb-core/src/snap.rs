//! Rotation and wall snapping
//!
//! Rotating an item changes its yaw in 45 degree steps. Wall-mounted items
//! additionally snap to the nearest wall orientation when the new yaw lands
//! within [`SNAP_TOLERANCE`] of it, and are pushed up against that wall.
//!
//! Everything here is a pure function of its inputs.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{ROTATION_STEP, SNAP_TOLERANCE};
use crate::room::Wall;

/// Rotation direction as seen from above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotateDirection {
    /// Counter-clockwise (+45 degrees)
    Left,
    /// Clockwise (-45 degrees)
    Right,
}

impl RotateDirection {
    /// Signed yaw change for one step
    pub fn delta(self) -> f32 {
        match self {
            RotateDirection::Left => ROTATION_STEP,
            RotateDirection::Right => -ROTATION_STEP,
        }
    }
}

/// Result of rotating an item once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationOutcome {
    pub yaw: f32,
    pub position: Vec3,
    /// Wall the item snapped to, if any
    pub snapped: Option<Wall>,
}

/// Map a yaw into `[0, 2π)`
pub fn normalize_yaw(yaw: f32) -> f32 {
    yaw.rem_euclid(TAU)
}

/// Shortest angular distance between two angles in `[0, 2π)`
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let direct = (a - b).abs();
    direct.min(TAU - direct)
}

/// Find the wall whose facing yaw is within tolerance of `yaw`.
///
/// Candidates are checked in ascending angle order and the first match wins.
pub fn snap_to_wall(yaw: f32) -> Option<Wall> {
    let normalized = normalize_yaw(yaw);
    Wall::ALL
        .into_iter()
        .find(|wall| angular_distance(normalized, wall.facing_yaw()) < SNAP_TOLERANCE)
}

/// Rotate an item one step and apply wall snapping when it is wall-mounted.
///
/// Non-wall-mounted items only accumulate yaw (no wraparound) and never move.
pub fn resolve_rotation(
    yaw: f32,
    direction: RotateDirection,
    wall_mounted: bool,
    position: Vec3,
    half: f32,
) -> RotationOutcome {
    let rotated = yaw + direction.delta();

    if !wall_mounted {
        return RotationOutcome {
            yaw: rotated,
            position,
            snapped: None,
        };
    }

    match snap_to_wall(rotated) {
        Some(wall) => RotationOutcome {
            yaw: wall.facing_yaw(),
            position: wall.against(position, half),
            snapped: Some(wall),
        },
        None => RotationOutcome {
            yaw: rotated,
            position,
            snapped: None,
        },
    }
}
