//! 3D room viewport
//!
//! The scene is projected on the CPU and painted as one colored egui mesh.
//! Primary or secondary drag orbits, scroll zooms, a primary press is routed
//! to the scene as a pointer-down on whatever lies under the cursor.

use egui::{Color32, Key, PointerButton};
use glam::Vec2;

use rb_core::{RotateDirection, SceneSnapshot};
use rb_renderer::{ScreenTriangle, pick, render_frame};

use super::{Panel, queue_all};
use crate::state::{AppAction, SharedAppState, SharedViewportState};
use crate::theme::palette::with_alpha;

/// Actions triggered by keyboard shortcuts, given which keys were pressed
pub fn shortcut_actions(pressed: impl Fn(Key) -> bool) -> Vec<AppAction> {
    let mut actions = Vec::new();
    if pressed(Key::Q) {
        actions.push(AppAction::RotateSelected(RotateDirection::Left));
    }
    if pressed(Key::E) {
        actions.push(AppAction::RotateSelected(RotateDirection::Right));
    }
    if pressed(Key::Delete) || pressed(Key::Backspace) {
        actions.push(AppAction::RemoveSelected);
    }
    if pressed(Key::Escape) {
        actions.push(AppAction::ClearSelection);
        actions.push(AppAction::Disarm);
    }
    actions
}

/// 3D viewport panel
#[derive(Default)]
pub struct ViewportPanel;

impl ViewportPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for ViewportPanel {
    fn name(&self) -> &str {
        "3D Viewport"
    }

    fn ui(&mut self, ui: &mut egui::Ui, _app_state: &SharedAppState) {
        // Fallback without viewport state
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::hover());

        painter.rect_filled(response.rect, 0.0, Color32::from_rgb(30, 30, 30));
        painter.text(
            response.rect.center(),
            egui::Align2::CENTER_CENTER,
            "3D Viewport",
            egui::FontId::proportional(16.0),
            Color32::GRAY,
        );
    }

    fn ui_with_viewport(
        &mut self,
        ui: &mut egui::Ui,
        app_state: &SharedAppState,
        viewport_state: &SharedViewportState,
    ) {
        let available_size = ui.available_size();
        if available_size.x < 1.0 || available_size.y < 1.0 {
            return;
        }

        let (response, painter) =
            ui.allocate_painter(available_size, egui::Sense::click_and_drag());
        let rect = response.rect;
        let (width, height) = (rect.width(), rect.height());
        let snapshot = app_state.lock().scene().snapshot();
        let mut actions = Vec::new();

        let mut vp_state = viewport_state.lock();
        vp_state.camera.update_aspect(width / height);

        // Orbit with primary or secondary drag
        if response.dragged_by(PointerButton::Primary)
            || response.dragged_by(PointerButton::Secondary)
        {
            let delta = response.drag_delta();
            let sensitivity = vp_state.config.camera.orbit_sensitivity;
            vp_state.camera.orbit(-delta.x * sensitivity, delta.y * sensitivity);
        }

        if response.hovered() {
            // Zoom with scroll
            let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll_delta != 0.0 {
                vp_state.camera.zoom(scroll_delta * 0.01);
            }

            actions.extend(ui.input(|i| shortcut_actions(|key| i.key_pressed(key))));
        }

        // Keep the camera in the room before anything looks through it
        vp_state.camera.apply_constraint(&snapshot.room);

        // Pointer down: pick what is under the cursor
        let pressed = ui.input(|i| i.pointer.primary_pressed());
        if pressed && let Some(pos) = response.hover_pos() {
            let local = pos - rect.min;
            let (origin, dir) = vp_state.camera.screen_to_ray(local.x, local.y, width, height);
            if let Some(hit) = pick(&snapshot, origin, dir) {
                tracing::debug!("Picked {:?} at {:?}", hit.target, hit.point);
                actions.push(AppAction::PointerDown {
                    point: hit.point,
                    target: hit.target,
                });
            }
        }

        // Render
        let [r, g, b, a] = vp_state.config.viewport.background_color.map(|c| (c * 255.0) as u8);
        painter.rect_filled(rect, 0.0, Color32::from_rgba_unmultiplied(r, g, b, a));
        let triangles = render_frame(
            &snapshot,
            &vp_state.camera,
            &vp_state.config,
            Vec2::new(width, height),
        );
        drop(vp_state);

        painter.add(egui::Shape::mesh(build_mesh(&triangles, rect.min)));
        draw_hint(ui, &painter, rect, &snapshot);

        if snapshot.armed.is_some() {
            response.on_hover_cursor(egui::CursorIcon::Crosshair);
        }

        queue_all(app_state, actions);
    }
}

/// Convert projected triangles to an egui mesh offset to the viewport origin
fn build_mesh(triangles: &[ScreenTriangle], origin: egui::Pos2) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    mesh.reserve_triangles(triangles.len());
    mesh.reserve_vertices(triangles.len() * 3);

    for tri in triangles {
        let [r, g, b, a] = tri.color;
        let color = Color32::from_rgba_unmultiplied(r, g, b, a);
        let base = mesh.vertices.len() as u32;
        for p in tri.points {
            mesh.colored_vertex(origin + egui::vec2(p.x, p.y), color);
        }
        mesh.add_triangle(base, base + 1, base + 2);
    }

    mesh
}

/// Placement hint in the top-left corner while a kind is armed
fn draw_hint(ui: &egui::Ui, painter: &egui::Painter, rect: egui::Rect, snapshot: &SceneSnapshot) {
    let Some(kind) = snapshot.armed else {
        return;
    };
    let visuals = ui.visuals();
    let galley = painter.layout_no_wrap(
        format!(
            "Click the floor or a wall to place the {} (Esc to cancel)",
            kind.label().to_lowercase()
        ),
        egui::FontId::proportional(14.0),
        visuals.text_color(),
    );

    let pos = rect.left_top() + egui::vec2(10.0, 10.0);
    let background = egui::Rect::from_min_size(pos, galley.size()).expand(6.0);
    painter.rect_filled(background, 4.0, with_alpha(visuals.window_fill, 220));
    painter.galley(pos, galley, visuals.text_color());
}
