//! Main application module

mod menu;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::actions::{ActionContext, dispatch_action};
use crate::config::{SharedConfig, create_shared_config};
use crate::panels::{Panel, PreferencesPanel, ToolbarPanel, ViewportPanel, WallItemsPanel};
use crate::state::{SharedAppState, SharedViewportState, ViewportState, create_shared_state};

pub use menu::{MenuAction, render_menu_bar};

/// Main application
pub struct RoomBuilderApp {
    app_state: SharedAppState,
    viewport_state: SharedViewportState,
    config: SharedConfig,
    toolbar: ToolbarPanel,
    wall_items: WallItemsPanel,
    viewport: ViewportPanel,
    preferences: PreferencesPanel,
    show_preferences: bool,
}

impl RoomBuilderApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = create_shared_config();
        let (room, renderer) = {
            let cfg = config.read();
            (cfg.config().startup.room(), cfg.config().renderer.clone())
        };

        let viewport_state = Arc::new(Mutex::new(ViewportState::new(&room, renderer)));
        crate::theme::apply_theme(&cc.egui_ctx, &config);

        tracing::info!("Starting with a {} room", room.size().label());

        Self {
            app_state: create_shared_state(room),
            viewport_state,
            config,
            toolbar: ToolbarPanel::new(),
            wall_items: WallItemsPanel::new(),
            viewport: ViewportPanel::new(),
            preferences: PreferencesPanel::new(),
            show_preferences: false,
        }
    }

    /// Process pending actions
    fn process_actions(&mut self) {
        let actions = self.app_state.lock().take_pending_actions();
        let ctx = ActionContext::new(&self.app_state, &self.viewport_state);

        for action in actions {
            dispatch_action(action, &ctx);
        }
    }
}

impl eframe::App for RoomBuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process pending actions
        self.process_actions();

        // Menu bar
        if let Some(menu_action) = render_menu_bar(ctx, &self.app_state) {
            match menu_action {
                MenuAction::OpenPreferences => self.show_preferences = true,
            }
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(2.0);
            self.toolbar.ui(ui, &self.app_state);
            ui.add_space(2.0);
        });

        egui::SidePanel::right("wall_items")
            .resizable(true)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.wall_items.ui(ui, &self.app_state);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.viewport
                    .ui_with_viewport(ui, &self.app_state, &self.viewport_state);
            });

        self.preferences.show(
            ctx,
            &self.config,
            &self.viewport_state,
            &mut self.show_preferences,
        );
    }
}
