//! UI panels

mod preferences;
mod toolbar;
mod viewport;
mod wall_items;

pub use preferences::{PreferencesPanel, PreferencesTab};
pub use toolbar::ToolbarPanel;
pub use viewport::{ViewportPanel, shortcut_actions};
pub use wall_items::WallItemsPanel;

use rb_core::ItemKind;

use crate::state::{AppAction, SharedAppState, SharedViewportState};

/// Panel trait for the application's UI regions
pub trait Panel {
    /// Panel name for headings
    fn name(&self) -> &str;

    /// Draw the panel UI
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState);

    /// Draw with access to the viewport (camera and renderer settings)
    fn ui_with_viewport(
        &mut self,
        ui: &mut egui::Ui,
        app_state: &SharedAppState,
        viewport_state: &SharedViewportState,
    ) {
        // Default: just call ui()
        let _ = viewport_state;
        self.ui(ui, app_state);
    }
}

/// One palette button per kind; clicking arms it, clicking the armed kind
/// again disarms
fn palette_buttons(
    ui: &mut egui::Ui,
    kinds: impl IntoIterator<Item = ItemKind>,
    armed: Option<ItemKind>,
    actions: &mut Vec<AppAction>,
) {
    for kind in kinds {
        let is_armed = armed == Some(kind);
        let response = ui
            .selectable_label(is_armed, kind.label())
            .on_hover_text(format!("Place a {}", kind.label().to_lowercase()));
        if response.clicked() {
            actions.push(if is_armed {
                AppAction::Disarm
            } else {
                AppAction::Arm(kind)
            });
        }
    }
}

/// Queue collected actions without holding the lock while drawing
fn queue_all(app_state: &SharedAppState, actions: Vec<AppAction>) {
    if actions.is_empty() {
        return;
    }
    let mut state = app_state.lock();
    for action in actions {
        state.queue_action(action);
    }
}
