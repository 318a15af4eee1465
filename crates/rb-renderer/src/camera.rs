//! Orbit camera for the room viewport
//!
//! The camera orbits the room center with Y up. Each frame the position is
//! clamped into the room by [`Camera::apply_constraint`], after which the
//! orbit parameters are re-derived from the clamped position so the next
//! drag continues from where the camera actually is.

use glam::{Mat4, Vec3, Vec4};
use rb_core::{RoomConfig, constrain_camera};

use crate::config::CameraConfig;

const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Orbit camera
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space
    pub position: Vec3,
    /// Look-at target
    pub target: Vec3,
    /// Up vector
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Viewport width / height
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    // Orbit state
    /// Rotation around the Y axis, 0 looks from +Z
    pub yaw: f32,
    /// Elevation above the XZ plane
    pub pitch: f32,
    /// Distance from the target
    pub distance: f32,
    /// Closest allowed orbit distance
    pub min_distance: f32,
    /// Farthest allowed orbit distance
    pub max_distance: f32,
    /// Zoom step per scroll unit
    pub zoom_sensitivity: f32,
}

impl Camera {
    /// Create a camera framing the given room
    pub fn new(room: &RoomConfig, config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 50.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            min_distance: 0.1,
            max_distance: 100.0,
            zoom_sensitivity: 0.1,
        };
        camera.apply_config(config);
        camera.reset_for_room(room, config);
        camera
    }

    /// Take over projection and input settings from the config
    pub fn apply_config(&mut self, config: &CameraConfig) {
        self.set_fov_degrees(config.fov_degrees);
        self.set_near(config.near_plane);
        self.set_far(config.far_plane);
        self.zoom_sensitivity = config.zoom_sensitivity;
    }

    /// Move the camera back to its starting pose for the room and update the
    /// zoom limits to the room size
    pub fn reset_for_room(&mut self, room: &RoomConfig, config: &CameraConfig) {
        let edge = room.edge();
        self.min_distance = edge * config.min_distance_factor;
        self.max_distance = (edge * config.max_distance_factor).max(self.min_distance);
        self.target = Vec3::ZERO;
        self.set_position(Vec3::new(0.0, edge / 2.0, edge * 1.2));
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
        self.update_position_from_orbit();
    }

    /// Zoom the camera; positive deltas move closer
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * self.zoom_sensitivity))
            .clamp(self.min_distance, self.max_distance);
        self.update_position_from_orbit();
    }

    /// Set field of view in degrees
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.clamp(10.0, 120.0).to_radians();
    }

    /// Get field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Set near clipping plane
    pub fn set_near(&mut self, near: f32) {
        self.near = near.max(0.001);
    }

    /// Set far clipping plane
    pub fn set_far(&mut self, far: f32) {
        self.far = far.max(self.near + 1.0);
    }

    /// Place the camera and re-derive the orbit parameters from it
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.sync_orbit_from_position();
    }

    /// Clamp the camera into the room and aim it at the room center.
    ///
    /// Returns true when the pose changed.
    pub fn apply_constraint(&mut self, room: &RoomConfig) -> bool {
        let pose = constrain_camera(self.position, room);
        if pose.position == self.position && pose.target == self.target {
            return false;
        }
        self.target = pose.target;
        self.set_position(pose.position);
        true
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.position = self.target + Vec3::new(x, y, z);
    }

    fn sync_orbit_from_position(&mut self) {
        let offset = self.position - self.target;
        let distance = offset.length();
        if distance < 1e-6 {
            return;
        }
        self.distance = distance;
        self.pitch = (offset.y / distance)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw = offset.x.atan2(offset.z);
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Convert screen coordinates to a world ray (origin, unit direction)
    pub fn screen_to_ray(
        &self,
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> (Vec3, Vec3) {
        // Convert to normalized device coordinates
        let ndc_x = (2.0 * screen_x / screen_width) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen_y / screen_height);

        let inv_view_proj = self.view_projection().inverse();

        // glam's perspective maps depth to [0, 1]
        let near = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        (near, (far - near).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rb_core::{RoomSize, WallColor};

    fn room(size: RoomSize) -> RoomConfig {
        RoomConfig::new(size, WallColor::default())
    }

    #[test]
    fn test_starting_pose() {
        let camera = Camera::new(&room(RoomSize::Medium), &CameraConfig::default(), 1.5);
        assert_eq!(camera.position, Vec3::new(0.0, 5.0, 12.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_relative_eq!(camera.fov_degrees(), 50.0, epsilon = 1e-4);
        assert_relative_eq!(camera.min_distance, 1.0);
        assert_relative_eq!(camera.max_distance, 50.0);
        assert_relative_eq!(camera.yaw, 0.0);
        assert_relative_eq!(camera.distance, 13.0, epsilon = 1e-5);
    }

    #[test]
    fn test_constraint_pulls_camera_inside() {
        let room = room(RoomSize::Medium);
        let mut camera = Camera::new(&room, &CameraConfig::default(), 1.0);

        assert!(camera.apply_constraint(&room));
        assert_relative_eq!(camera.position.z, 4.9, epsilon = 1e-5);
        assert_relative_eq!(camera.position.y, 5.0);
        assert_relative_eq!(camera.distance, camera.position.length(), epsilon = 1e-5);

        // Already inside: nothing to do
        assert!(!camera.apply_constraint(&room));
    }

    #[test]
    fn test_orbit_resumes_from_clamped_pose() {
        let room = room(RoomSize::Small);
        let mut camera = Camera::new(&room, &CameraConfig::default(), 1.0);
        camera.apply_constraint(&room);
        let before = camera.position;

        camera.orbit(0.0, 0.0);
        assert!((camera.position - before).length() < 1e-4);
    }

    #[test]
    fn test_zoom_limits() {
        let room = room(RoomSize::Small);
        let mut camera = Camera::new(&room, &CameraConfig::default(), 1.0);

        for _ in 0..200 {
            camera.zoom(1.0);
        }
        assert_relative_eq!(camera.distance, 0.8, epsilon = 1e-5);

        for _ in 0..200 {
            camera.zoom(-1.0);
        }
        assert_relative_eq!(camera.distance, 40.0, epsilon = 1e-3);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::new(&room(RoomSize::Medium), &CameraConfig::default(), 1.0);
        camera.orbit(0.0, 10.0);
        assert!(camera.pitch <= MAX_PITCH);
        assert!(camera.position.y > 0.0);
    }

    #[test]
    fn test_screen_center_ray_hits_target() {
        let room = room(RoomSize::Medium);
        let mut camera = Camera::new(&room, &CameraConfig::default(), 1.0);
        camera.apply_constraint(&room);

        let (origin, dir) = camera.screen_to_ray(50.0, 50.0, 100.0, 100.0);
        let expected = (camera.target - camera.position).normalize();
        assert_relative_eq!(dir.dot(expected), 1.0, epsilon = 1e-4);
        assert!((origin - camera.position).length() < 0.2);
    }
}
