//! Scene model and the command handlers that mutate it
//!
//! `SceneState` owns the room, the ordered catalog of placed items, the armed
//! kind and the selection. Collaborators read it through accessors or a
//! [`SceneSnapshot`] and change it only through the command methods below.
//! Commands that do not apply to the current state are no-ops and say so
//! through their return value.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::item::{ItemKind, PlacementItem};
use crate::room::{RoomConfig, RoomSize, Surface, WallColor};
use crate::snap::{RotateDirection, RotationOutcome, resolve_rotation};
use crate::snapshot::SceneSnapshot;

/// What a pointer press landed on, as reported by picking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    /// Geometry of the placed item at this index
    Item(usize),
    /// A face of the room shell
    Surface(Surface),
}

/// Effect of a routed pointer press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Selected(usize),
    Placed(usize),
    Ignored,
}

/// Complete editable state of one furnishing session
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    room: RoomConfig,
    items: Vec<PlacementItem>,
    armed: Option<ItemKind>,
    selected: Option<usize>,
}

impl SceneState {
    /// Create an empty scene for the given room
    pub fn new(room: RoomConfig) -> Self {
        Self {
            room,
            ..Self::default()
        }
    }

    pub fn room(&self) -> &RoomConfig {
        &self.room
    }

    /// Placed items in placement order
    pub fn items(&self) -> &[PlacementItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&PlacementItem> {
        self.items.get(index)
    }

    /// Kind that the next placement will create
    pub fn armed(&self) -> Option<ItemKind> {
        self.armed
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&PlacementItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    // Room config

    pub fn set_room_size(&mut self, size: RoomSize) {
        self.room.set_size(size);
    }

    pub fn set_wall_color(&mut self, color: WallColor) {
        self.room.set_wall_color(color);
    }

    // Placement

    /// Arm a kind for the next placement, replacing any previously armed kind
    pub fn arm(&mut self, kind: ItemKind) {
        self.armed = Some(kind);
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Place the armed kind at a point on the floor or a wall.
    ///
    /// The item always rests at its kind's resting height, whichever surface
    /// was hit. Returns the new item's index, or `None` when nothing is armed.
    pub fn place_at(&mut self, point: Vec3) -> Option<usize> {
        let kind = self.armed.take()?;
        self.items.push(PlacementItem::at(kind, point));
        Some(self.items.len() - 1)
    }

    // Selection / removal

    /// Select the item at `index`; stale indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Remove the selected item and clear the selection
    pub fn remove_selected(&mut self) -> Option<PlacementItem> {
        let index = self.selected.take()?;
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    // Transform

    /// Rotate the selected item one step, snapping wall-mounted kinds to walls
    pub fn rotate_selected(&mut self, direction: RotateDirection) -> Option<RotationOutcome> {
        let half = self.room.half();
        let item = self.selected.and_then(|i| self.items.get_mut(i))?;

        let outcome = resolve_rotation(
            item.yaw(),
            direction,
            item.kind.is_wall_mounted(),
            item.position,
            half,
        );
        item.rotation.y = outcome.yaw;
        item.position = outcome.position;
        Some(outcome)
    }

    // Picking

    /// Route a pointer press: items are selected, floor and walls receive
    /// the armed item, the ceiling does nothing
    pub fn pointer_down(&mut self, point: Vec3, target: HitTarget) -> PointerOutcome {
        match target {
            HitTarget::Item(index) => {
                if self.select(index) {
                    PointerOutcome::Selected(index)
                } else {
                    PointerOutcome::Ignored
                }
            }
            HitTarget::Surface(surface) if surface.is_placement_target() => self
                .place_at(point)
                .map_or(PointerOutcome::Ignored, PointerOutcome::Placed),
            HitTarget::Surface(_) => PointerOutcome::Ignored,
        }
    }

    /// Read-only copy of everything the renderer needs
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(self)
    }
}
