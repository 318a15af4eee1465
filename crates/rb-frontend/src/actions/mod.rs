//! Action handling module
//!
//! This module contains the action dispatch system for Room Builder.
//! Actions are queued in AppState and processed each frame.

mod room;
mod scene;

use crate::state::{AppAction, SharedAppState, SharedViewportState};

pub use room::handle_room_action;
pub use scene::handle_scene_action;

/// Context for action handlers
pub struct ActionContext<'a> {
    pub app_state: &'a SharedAppState,
    pub viewport_state: &'a SharedViewportState,
}

impl<'a> ActionContext<'a> {
    pub fn new(app_state: &'a SharedAppState, viewport_state: &'a SharedViewportState) -> Self {
        Self {
            app_state,
            viewport_state,
        }
    }
}

/// Dispatch an action to the appropriate handler
pub fn dispatch_action(action: AppAction, ctx: &ActionContext) {
    match action {
        // Room and camera actions
        AppAction::SetRoomSize(_) | AppAction::SetWallColor(_) | AppAction::ResetCamera => {
            handle_room_action(action, ctx);
        }

        // Palette, selection and pointer actions
        AppAction::Arm(_)
        | AppAction::Disarm
        | AppAction::SelectItem(_)
        | AppAction::ClearSelection
        | AppAction::RotateSelected(_)
        | AppAction::RemoveSelected
        | AppAction::PointerDown { .. } => {
            handle_scene_action(action, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;
    use parking_lot::Mutex;
    use rb_core::{
        HitTarget, ItemKind, RoomConfig, RoomSize, RotateDirection, Surface, Wall, WallColor,
    };
    use rb_renderer::RendererConfig;

    use super::*;
    use crate::state::{ViewportState, create_shared_state};

    fn setup() -> (SharedAppState, SharedViewportState) {
        let room = RoomConfig::default();
        let viewport = ViewportState::new(&room, RendererConfig::default());
        (create_shared_state(room), Arc::new(Mutex::new(viewport)))
    }

    fn run(app: &SharedAppState, viewport: &SharedViewportState, actions: Vec<AppAction>) {
        let ctx = ActionContext::new(app, viewport);
        for action in actions {
            dispatch_action(action, &ctx);
        }
    }

    #[test]
    fn test_place_select_rotate_remove() {
        let (app, viewport) = setup();
        let south = HitTarget::Surface(Surface::Wall(Wall::South));

        run(
            &app,
            &viewport,
            vec![
                AppAction::Arm(ItemKind::Painting),
                AppAction::PointerDown {
                    point: Vec3::new(0.0, 2.0, -5.0),
                    target: south,
                },
                AppAction::SelectItem(0),
                AppAction::RotateSelected(RotateDirection::Left),
                AppAction::RotateSelected(RotateDirection::Left),
            ],
        );

        {
            let state = app.lock();
            let painting = state.scene().item(0).unwrap();
            assert!((painting.position.x + 4.94).abs() < 1e-5);
            assert_eq!(state.scene().selected(), Some(0));
            assert_eq!(state.scene().armed(), None);
        }

        run(&app, &viewport, vec![AppAction::RemoveSelected]);
        assert!(app.lock().scene().items().is_empty());
    }

    #[test]
    fn test_ceiling_and_unarmed_clicks_do_nothing() {
        let (app, viewport) = setup();
        run(
            &app,
            &viewport,
            vec![
                AppAction::PointerDown {
                    point: Vec3::new(1.0, 0.0, 1.0),
                    target: HitTarget::Surface(Surface::Floor),
                },
                AppAction::Arm(ItemKind::Chair),
                AppAction::PointerDown {
                    point: Vec3::new(1.0, 10.0, 1.0),
                    target: HitTarget::Surface(Surface::Ceiling),
                },
            ],
        );

        let state = app.lock();
        assert!(state.scene().items().is_empty());
        assert_eq!(state.scene().armed(), Some(ItemKind::Chair));
    }

    #[test]
    fn test_escape_sequence_clears_everything() {
        let (app, viewport) = setup();
        run(
            &app,
            &viewport,
            vec![
                AppAction::Arm(ItemKind::Table),
                AppAction::PointerDown {
                    point: Vec3::ZERO,
                    target: HitTarget::Surface(Surface::Floor),
                },
                AppAction::SelectItem(0),
                AppAction::Arm(ItemKind::Rug),
                AppAction::ClearSelection,
                AppAction::Disarm,
            ],
        );

        let state = app.lock();
        assert_eq!(state.scene().selected(), None);
        assert_eq!(state.scene().armed(), None);
        assert_eq!(state.scene().items().len(), 1);
    }

    #[test]
    fn test_room_resize_recenters_camera() {
        let (app, viewport) = setup();
        viewport.lock().camera.orbit(2.0, 0.0);

        run(
            &app,
            &viewport,
            vec![
                AppAction::SetRoomSize(RoomSize::Large),
                AppAction::SetWallColor(WallColor([1, 2, 3])),
            ],
        );

        let room = *app.lock().scene().room();
        assert_eq!(room.size(), RoomSize::Large);
        assert_eq!(room.wall_color(), WallColor([1, 2, 3]));

        let camera = viewport.lock().camera.clone();
        assert_eq!(camera.position.x, 0.0);
        assert!((camera.max_distance - 75.0).abs() < 1e-4);
    }
}
