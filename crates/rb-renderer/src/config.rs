//! Renderer configuration structures
//!
//! This module provides configurable settings for the renderer that can be
//! serialized and loaded from configuration files.

use serde::{Deserialize, Serialize};

/// Viewport rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Background clear color (RGBA), visible only outside the room shell
    pub background_color: [f32; 4],
    /// Tint blended into the selected item's color (RGB)
    pub highlight_color: [f32; 3],
    /// How strongly the highlight tint is blended in (0 = off, 1 = solid)
    pub highlight_strength: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::dark()
    }
}

impl ViewportConfig {
    /// Create dark theme viewport config
    pub fn dark() -> Self {
        Self {
            background_color: [0.15, 0.15, 0.18, 1.0],
            highlight_color: [1.0, 0.85, 0.2],
            highlight_strength: 0.35,
        }
    }

    /// Create light theme viewport config
    pub fn light() -> Self {
        Self {
            background_color: [0.92, 0.92, 0.94, 1.0],
            highlight_color: [0.1, 0.5, 1.0],
            highlight_strength: 0.35,
        }
    }
}

/// Lighting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightingConfig {
    /// Directional light position as multiples of the room edge
    /// (the light shines from there towards the room center)
    pub position_factor: [f32; 3],
    /// Directional light intensity multiplier
    pub intensity: f32,
    /// Ambient light strength
    pub ambient_strength: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            position_factor: [1.0, 2.0, 1.0],
            intensity: 1.0,
            ambient_strength: 0.6,
        }
    }
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
    /// Zoom sensitivity multiplier
    pub zoom_sensitivity: f32,
    /// Orbit sensitivity multiplier
    pub orbit_sensitivity: f32,
    /// Minimum orbit distance as a fraction of the room edge
    pub min_distance_factor: f32,
    /// Maximum orbit distance as a multiple of the room edge
    pub max_distance_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 50.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            zoom_sensitivity: 0.1,
            orbit_sensitivity: 0.005,
            min_distance_factor: 0.1,
            max_distance_factor: 5.0,
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Lighting settings
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
}

impl RendererConfig {
    /// Apply dark theme colors to the viewport
    pub fn apply_dark_theme(&mut self) {
        self.viewport = ViewportConfig {
            highlight_strength: self.viewport.highlight_strength,
            ..ViewportConfig::dark()
        };
    }

    /// Apply light theme colors to the viewport
    pub fn apply_light_theme(&mut self) {
        self.viewport = ViewportConfig {
            highlight_strength: self.viewport.highlight_strength,
            ..ViewportConfig::light()
        };
    }
}
