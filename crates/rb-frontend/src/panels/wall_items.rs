//! Sidebar with the wall-item palette

use rb_core::{ItemGroup, ItemKind};

use super::{Panel, palette_buttons, queue_all};
use crate::state::SharedAppState;

/// Wall items sidebar
#[derive(Default)]
pub struct WallItemsPanel;

impl WallItemsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for WallItemsPanel {
    fn name(&self) -> &str {
        "Wall Items"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (armed, count) = {
            let state = app_state.lock();
            (state.scene().armed(), state.scene().items().len())
        };
        let mut actions = Vec::new();

        ui.heading(self.name());
        ui.add_space(4.0);
        ui.vertical_centered_justified(|ui| {
            palette_buttons(ui, ItemKind::in_group(ItemGroup::WallItem), armed, &mut actions);
        });

        ui.separator();
        ui.weak("Rotate a wall item towards a wall to hang it there.");

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.weak(format!("{count} items placed"));
        });

        queue_all(app_state, actions);
    }
}
