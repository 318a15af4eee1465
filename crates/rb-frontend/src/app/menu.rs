//! Menu bar rendering

use crate::state::{AppAction, SharedAppState};

/// Render the menu bar and return any triggered action
pub fn render_menu_bar(ctx: &egui::Context, app_state: &SharedAppState) -> Option<MenuAction> {
    let mut menu_action = None;
    let has_selection = app_state.lock().scene().selected().is_some();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Preferences...").clicked() {
                    menu_action = Some(MenuAction::OpenPreferences);
                    ui.close_menu();
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(has_selection, egui::Button::new("Remove Selected"))
                    .clicked()
                {
                    app_state.lock().queue_action(AppAction::RemoveSelected);
                    ui.close_menu();
                }
                if ui.button("Clear Selection").clicked() {
                    app_state.lock().queue_action(AppAction::ClearSelection);
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera").clicked() {
                    app_state.lock().queue_action(AppAction::ResetCamera);
                    ui.close_menu();
                }
            });
        });
    });

    menu_action
}

/// Actions triggered by the menu that the app handles itself
pub enum MenuAction {
    OpenPreferences,
}
