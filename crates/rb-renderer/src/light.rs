//! Directional light for flat shading

use glam::Vec3;
use rb_core::RoomConfig;

use crate::config::LightingConfig;

/// Directional light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Unit vector pointing from the scene towards the light
    pub direction: Vec3,
    /// Light intensity
    pub intensity: f32,
    /// Ambient strength added to every face
    pub ambient: f32,
}

impl DirectionalLight {
    /// Place the light relative to the room size
    pub fn for_room(room: &RoomConfig, config: &LightingConfig) -> Self {
        let position = Vec3::from_array(config.position_factor) * room.edge();
        Self {
            direction: position.normalize_or_zero(),
            intensity: config.intensity,
            ambient: config.ambient_strength,
        }
    }

    /// Brightness factor for a face with the given normal, in [0, 1]
    pub fn shade(&self, normal: Vec3) -> f32 {
        let diffuse = normal.dot(self.direction).max(0.0) * self.intensity;
        (self.ambient + diffuse).clamp(0.0, 1.0)
    }
}
