//! Viewport rendering state

use std::sync::Arc;

use parking_lot::Mutex;

use rb_core::RoomConfig;
use rb_renderer::{Camera, RendererConfig};

/// Viewport rendering state
pub struct ViewportState {
    pub camera: Camera,
    pub config: RendererConfig,
}

impl ViewportState {
    /// Create a new viewport state framing the room
    pub fn new(room: &RoomConfig, config: RendererConfig) -> Self {
        let camera = Camera::new(room, &config.camera, 1.0);
        Self { camera, config }
    }

    /// Replace the renderer settings, keeping the current camera pose
    pub fn set_config(&mut self, config: RendererConfig) {
        self.camera.apply_config(&config.camera);
        self.config = config;
    }

    /// Put the camera back at the starting pose for the room
    pub fn reset_camera(&mut self, room: &RoomConfig) {
        self.camera.reset_for_room(room, &self.config.camera);
        self.camera.apply_constraint(room);
    }
}

/// Shared viewport state
pub type SharedViewportState = Arc<Mutex<ViewportState>>;

#[cfg(test)]
mod tests {
    use super::*;
    use rb_core::{RoomSize, WallColor};

    #[test]
    fn test_reset_camera_lands_inside_room() {
        let room = RoomConfig::new(RoomSize::Small, WallColor::default());
        let mut state = ViewportState::new(&room, RendererConfig::default());
        state.camera.orbit(1.0, 0.3);
        state.reset_camera(&room);

        let (min, max) = rb_core::camera_bounds(&room);
        let p = state.camera.position;
        assert!(p.cmpge(min).all() && p.cmple(max).all());
        assert_eq!(p.x, 0.0);
    }
}
