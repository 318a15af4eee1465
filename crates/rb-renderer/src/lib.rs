//! Room Builder Renderer
//!
//! Software 3D pipeline for the room viewport. The frontend paints the
//! resulting 2D triangles with its own painter; nothing here talks to a GPU.
//!
//! # Module Structure
//!
//! ```text
//! rb-renderer/
//! ├── camera.rs       # Orbit camera, room containment, screen rays
//! ├── config.rs       # Serializable viewport, lighting and camera settings
//! ├── light.rs        # Directional light and flat shading
//! ├── bounds.rs       # Bounding boxes with ray tests
//! ├── clip.rs         # Polygon clipping against planes and boxes
//! ├── picking.rs      # Pointer ray against items and room shell
//! ├── tessellate.rs   # Snapshot to shaded world triangles
//! └── projection.rs   # World triangles to screen triangles in paint order
//! ```
//!
//! One frame runs [`Camera::apply_constraint`], then [`SceneMesh::build`],
//! then [`project_scene`].

pub mod bounds;
pub mod camera;
pub mod clip;
pub mod config;
pub mod light;
pub mod picking;
pub mod projection;
pub mod tessellate;

pub use bounds::BoundingBox;
pub use camera::Camera;
pub use config::{CameraConfig, LightingConfig, RendererConfig, ViewportConfig};
pub use light::DirectionalLight;
pub use picking::{PickHit, pick};
pub use projection::{ScreenTriangle, project_scene};
pub use tessellate::{SceneMesh, ShadedTriangle};

/// Build and project one frame of the scene
pub fn render_frame(
    snapshot: &rb_core::SceneSnapshot,
    camera: &Camera,
    config: &RendererConfig,
    viewport: glam::Vec2,
) -> Vec<ScreenTriangle> {
    let mesh = SceneMesh::build(snapshot, config);
    let triangles = project_scene(&mesh, camera, viewport);
    tracing::trace!(
        built = mesh.triangle_count(),
        painted = triangles.len(),
        "Rendered room frame"
    );
    triangles
}
