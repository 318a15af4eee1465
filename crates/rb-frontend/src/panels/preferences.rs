//! Preferences window for application settings

use rb_core::{RoomSize, WallColor};

use crate::config::{SharedConfig, UiTheme};
use crate::state::SharedViewportState;

/// Current tab in the preferences window
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PreferencesTab {
    #[default]
    Room,
    Camera,
    Interface,
}

/// Preferences window panel
#[derive(Default)]
pub struct PreferencesPanel {
    current_tab: PreferencesTab,
}

impl PreferencesPanel {
    /// Create a new preferences panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the preferences window
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        config: &SharedConfig,
        viewport_state: &SharedViewportState,
        open: &mut bool,
    ) {
        egui::Window::new("Preferences")
            .open(open)
            .resizable(true)
            .default_size([420.0, 320.0])
            .show(ctx, |ui| {
                // Tab bar
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.current_tab, PreferencesTab::Room, "Room");
                    ui.selectable_value(&mut self.current_tab, PreferencesTab::Camera, "Camera");
                    ui.selectable_value(
                        &mut self.current_tab,
                        PreferencesTab::Interface,
                        "Interface",
                    );
                });

                ui.separator();

                match self.current_tab {
                    PreferencesTab::Room => self.room_tab(ui, config),
                    PreferencesTab::Camera => self.camera_tab(ui, config, viewport_state),
                    PreferencesTab::Interface => self.interface_tab(ui, config, viewport_state),
                }

                ui.separator();

                // Bottom buttons
                ui.horizontal(|ui| {
                    if ui.button("Reset to Defaults").clicked() {
                        config.write().reset_to_defaults();
                        let renderer = config.read().config().renderer.clone();
                        viewport_state.lock().set_config(renderer);
                        crate::theme::apply_theme(ui.ctx(), config);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Save").clicked()
                            && let Err(e) = config.read().save()
                        {
                            tracing::error!("Failed to save config: {}", e);
                        }
                    });
                });
            });
    }

    fn room_tab(&mut self, ui: &mut egui::Ui, config: &SharedConfig) {
        let mut cfg = config.write();
        let startup = &mut cfg.config_mut().startup;

        ui.label("Room used when the application starts.");
        ui.add_space(4.0);

        egui::Grid::new("startup_room").num_columns(2).show(ui, |ui| {
            ui.label("Size:");
            egui::ComboBox::from_id_salt("startup_room_size")
                .selected_text(startup.room_size.label())
                .show_ui(ui, |ui| {
                    for size in RoomSize::ALL {
                        ui.selectable_value(&mut startup.room_size, size, size.label());
                    }
                });
            ui.end_row();

            ui.label("Wall color:");
            let mut rgb = startup.wall_color.rgb();
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                startup.wall_color = WallColor(rgb);
            }
            ui.end_row();
        });
    }

    fn camera_tab(
        &mut self,
        ui: &mut egui::Ui,
        config: &SharedConfig,
        viewport_state: &SharedViewportState,
    ) {
        let mut cfg = config.write();
        let mut camera = cfg.config().renderer.camera.clone();
        let mut changed = false;

        changed |= ui
            .add(egui::Slider::new(&mut camera.fov_degrees, 20.0..=90.0).text("Field of View"))
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut camera.orbit_sensitivity, 0.001..=0.02)
                    .logarithmic(true)
                    .text("Orbit Sensitivity"),
            )
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut camera.zoom_sensitivity, 0.02..=0.5)
                    .logarithmic(true)
                    .text("Zoom Sensitivity"),
            )
            .changed();

        if changed {
            cfg.config_mut().renderer.camera = camera;
            let renderer = cfg.config().renderer.clone();
            drop(cfg);
            viewport_state.lock().set_config(renderer);
        }
    }

    fn interface_tab(
        &mut self,
        ui: &mut egui::Ui,
        config: &SharedConfig,
        viewport_state: &SharedViewportState,
    ) {
        let mut cfg = config.write();
        let mut theme = cfg.config().ui.theme;

        ui.horizontal(|ui| {
            ui.label("Theme:");
            ui.selectable_value(&mut theme, UiTheme::Dark, "Dark");
            ui.selectable_value(&mut theme, UiTheme::Light, "Light");
        });

        // Apply theme immediately (hot reload)
        if theme != cfg.config().ui.theme {
            cfg.config_mut().ui.theme = theme;
            match theme {
                UiTheme::Dark => cfg.config_mut().renderer.apply_dark_theme(),
                UiTheme::Light => cfg.config_mut().renderer.apply_light_theme(),
            }
            let renderer = cfg.config().renderer.clone();
            drop(cfg);

            viewport_state.lock().set_config(renderer);
            crate::theme::apply_theme(ui.ctx(), config);
        }
    }
}
