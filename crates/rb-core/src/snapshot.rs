//! Read-only scene snapshot handed to rendering collaborators

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::item::ItemKind;
use crate::room::RoomConfig;
use crate::scene::SceneState;

/// Drawable descriptor for one placed item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Index in the scene catalog at capture time
    pub index: usize,
    pub kind: ItemKind,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Owned copy of the scene state at one point in time
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub room: RoomConfig,
    pub items: Vec<ItemDescriptor>,
    pub selected: Option<usize>,
    pub armed: Option<ItemKind>,
}

impl SceneSnapshot {
    pub(crate) fn capture(scene: &SceneState) -> Self {
        let items = scene
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| ItemDescriptor {
                index,
                kind: item.kind,
                position: item.position,
                rotation: item.rotation,
            })
            .collect();

        Self {
            room: *scene.room(),
            items,
            selected: scene.selected(),
            armed: scene.armed(),
        }
    }

    /// Whether the item at `index` is the selected one
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}
