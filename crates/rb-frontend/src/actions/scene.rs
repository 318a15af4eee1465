//! Placement, selection and pointer action handlers

use rb_core::PointerOutcome;

use crate::state::AppAction;

use super::ActionContext;

/// Handle scene actions
pub fn handle_scene_action(action: AppAction, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();
    let scene = state.scene_mut();

    match action {
        AppAction::Arm(kind) => {
            scene.arm(kind);
            tracing::info!("Armed {}", kind);
        }
        AppAction::Disarm => {
            scene.disarm();
        }
        AppAction::SelectItem(index) => {
            if scene.select(index) {
                tracing::info!("Selected item {}", index);
            } else {
                tracing::warn!("No item at index {}", index);
            }
        }
        AppAction::ClearSelection => {
            scene.clear_selection();
        }
        AppAction::RotateSelected(direction) => match scene.rotate_selected(direction) {
            Some(outcome) => {
                tracing::info!("Rotated item to {:.1}\u{00b0}", outcome.yaw.to_degrees());
                if let Some(wall) = outcome.snapped {
                    tracing::debug!("Snapped to {} wall at {:?}", wall.name(), outcome.position);
                }
            }
            None => tracing::warn!("Rotate ignored: nothing selected"),
        },
        AppAction::RemoveSelected => match scene.remove_selected() {
            Some(item) => tracing::info!("Removed {}", item.kind),
            None => tracing::warn!("Remove ignored: nothing selected"),
        },
        AppAction::PointerDown { point, target } => match scene.pointer_down(point, target) {
            PointerOutcome::Selected(index) => {
                tracing::debug!("Pointer selected item {}", index);
            }
            PointerOutcome::Placed(index) => {
                let kind = scene.item(index).map(|item| item.kind);
                tracing::info!("Placed {:?} at {:?}", kind, point);
            }
            PointerOutcome::Ignored => {
                tracing::debug!("Pointer on {:?} ignored", target);
            }
        },
        _ => {}
    }
}
