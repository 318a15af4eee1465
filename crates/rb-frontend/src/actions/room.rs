//! Room and camera action handlers

use crate::state::AppAction;

use super::ActionContext;

/// Handle room actions
pub fn handle_room_action(action: AppAction, ctx: &ActionContext) {
    match action {
        AppAction::SetRoomSize(size) => {
            let room = {
                let mut state = ctx.app_state.lock();
                if state.scene().room().size() == size {
                    return;
                }
                state.scene_mut().set_room_size(size);
                *state.scene().room()
            };
            tracing::info!("Room resized to {}", size.label());
            ctx.viewport_state.lock().reset_camera(&room);
        }
        AppAction::SetWallColor(color) => {
            ctx.app_state.lock().scene_mut().set_wall_color(color);
            tracing::info!("Wall color set to {}", color);
        }
        AppAction::ResetCamera => {
            let room = *ctx.app_state.lock().scene().room();
            ctx.viewport_state.lock().reset_camera(&room);
            tracing::debug!("Camera reset");
        }
        _ => {}
    }
}
