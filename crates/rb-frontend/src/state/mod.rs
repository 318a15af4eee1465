//! Application state module

mod viewport;

pub use viewport::{SharedViewportState, ViewportState};

use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;

use rb_core::{HitTarget, ItemKind, RoomConfig, RoomSize, RotateDirection, SceneState, WallColor};

/// Actions that can be performed on the app state
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Room actions
    /// Resize the room
    SetRoomSize(RoomSize),
    /// Repaint the walls
    SetWallColor(WallColor),

    // Palette actions
    /// Arm an item kind for the next placement
    Arm(ItemKind),
    /// Drop the armed kind
    Disarm,

    // Selection actions
    /// Select an item by catalog index
    SelectItem(usize),
    /// Clear the selection
    ClearSelection,
    /// Rotate the selected item one step
    RotateSelected(RotateDirection),
    /// Remove the selected item
    RemoveSelected,

    // Viewport actions
    /// Pointer pressed on something in the viewport
    PointerDown { point: Vec3, target: HitTarget },
    /// Move the camera back to its starting pose
    ResetCamera,
}

/// Application state
#[derive(Default)]
pub struct AppState {
    /// The room and everything placed in it
    scene: SceneState,
    /// Pending actions
    pending_actions: Vec<AppAction>,
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given room and an empty catalog
    pub fn with_room(room: RoomConfig) -> Self {
        Self {
            scene: SceneState::new(room),
            pending_actions: Vec::new(),
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneState {
        &mut self.scene
    }

    /// Queue an action
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }
}

/// Shared application state
pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state for the given room
pub fn create_shared_state(room: RoomConfig) -> SharedAppState {
    Arc::new(Mutex::new(AppState::with_room(room)))
}
