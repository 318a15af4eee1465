//! Top toolbar: furniture palette, room settings and selection controls

use rb_core::{ItemGroup, ItemKind, RoomSize, RotateDirection, WallColor};

use super::{Panel, palette_buttons, queue_all};
use crate::state::{AppAction, SharedAppState};

/// Top toolbar panel
#[derive(Default)]
pub struct ToolbarPanel;

impl ToolbarPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for ToolbarPanel {
    fn name(&self) -> &str {
        "Toolbar"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (armed, room, selected) = {
            let state = app_state.lock();
            let scene = state.scene();
            (
                scene.armed(),
                *scene.room(),
                scene.selected_item().map(|item| item.kind),
            )
        };
        let mut actions = Vec::new();

        ui.horizontal_wrapped(|ui| {
            ui.label("Furniture:");
            palette_buttons(ui, ItemKind::in_group(ItemGroup::Furniture), armed, &mut actions);

            ui.separator();

            let mut size = room.size();
            egui::ComboBox::from_id_salt("room_size")
                .selected_text(size.label())
                .show_ui(ui, |ui| {
                    for option in RoomSize::ALL {
                        ui.selectable_value(&mut size, option, option.label());
                    }
                });
            if size != room.size() {
                actions.push(AppAction::SetRoomSize(size));
            }

            ui.label("Walls:");
            let mut rgb = room.wall_color().rgb();
            if ui
                .color_edit_button_srgb(&mut rgb)
                .on_hover_text(room.wall_color().to_string())
                .changed()
            {
                actions.push(AppAction::SetWallColor(WallColor(rgb)));
            }

            if let Some(kind) = selected {
                ui.separator();
                ui.label(format!("Selected: {}", kind.label()));
                if ui.button("\u{27f2} Rotate left").on_hover_text("Q").clicked() {
                    actions.push(AppAction::RotateSelected(RotateDirection::Left));
                }
                if ui.button("Rotate right \u{27f3}").on_hover_text("E").clicked() {
                    actions.push(AppAction::RotateSelected(RotateDirection::Right));
                }
                if ui.button("Remove").on_hover_text("Delete").clicked() {
                    actions.push(AppAction::RemoveSelected);
                }
            }
        });

        queue_all(app_state, actions);
    }
}
