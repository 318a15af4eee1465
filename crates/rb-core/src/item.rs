//! Item catalog and placed items

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::RUG_RESTING_HEIGHT;
use crate::error::Error;

/// Palette group an item kind is offered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemGroup {
    /// Free-standing furniture (top toolbar)
    Furniture,
    /// Items meant to hang on or stand against a wall (sidebar)
    WallItem,
}

/// Kind of furniture or wall item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Chair,
    Table,
    Dresser,
    Sofa,
    Bed,
    Rug,
    Bookshelf,
    FloorLamp,
    DeskWithMonitor,
    Painting,
    Poster,
    Pillar,
    Clock,
}

impl ItemKind {
    /// Every kind, furniture first
    pub const ALL: [ItemKind; 13] = [
        ItemKind::Chair,
        ItemKind::Table,
        ItemKind::Dresser,
        ItemKind::Sofa,
        ItemKind::Bed,
        ItemKind::Rug,
        ItemKind::Bookshelf,
        ItemKind::FloorLamp,
        ItemKind::DeskWithMonitor,
        ItemKind::Painting,
        ItemKind::Poster,
        ItemKind::Pillar,
        ItemKind::Clock,
    ];

    /// Vertical offset applied on placement
    pub fn resting_height(self) -> f32 {
        match self {
            ItemKind::Rug => RUG_RESTING_HEIGHT,
            _ => 0.0,
        }
    }

    /// Whether rotating this kind snaps it to walls
    pub fn is_wall_mounted(self) -> bool {
        matches!(
            self,
            ItemKind::Painting | ItemKind::Poster | ItemKind::Pillar | ItemKind::Clock
        )
    }

    /// Palette group
    pub fn group(self) -> ItemGroup {
        if self.is_wall_mounted() {
            ItemGroup::WallItem
        } else {
            ItemGroup::Furniture
        }
    }

    /// Kebab-case identifier
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Chair => "chair",
            ItemKind::Table => "table",
            ItemKind::Dresser => "dresser",
            ItemKind::Sofa => "sofa",
            ItemKind::Bed => "bed",
            ItemKind::Rug => "rug",
            ItemKind::Bookshelf => "bookshelf",
            ItemKind::FloorLamp => "floor-lamp",
            ItemKind::DeskWithMonitor => "desk-with-monitor",
            ItemKind::Painting => "painting",
            ItemKind::Poster => "poster",
            ItemKind::Pillar => "pillar",
            ItemKind::Clock => "clock",
        }
    }

    /// Get display name
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Chair => "Chair",
            ItemKind::Table => "Table",
            ItemKind::Dresser => "Dresser",
            ItemKind::Sofa => "Sofa",
            ItemKind::Bed => "Bed",
            ItemKind::Rug => "Rug",
            ItemKind::Bookshelf => "Bookshelf",
            ItemKind::FloorLamp => "Floor Lamp",
            ItemKind::DeskWithMonitor => "Desk",
            ItemKind::Painting => "Painting",
            ItemKind::Poster => "Poster",
            ItemKind::Pillar => "Pillar",
            ItemKind::Clock => "Clock",
        }
    }

    /// Kinds belonging to one palette group, in catalog order
    pub fn in_group(group: ItemGroup) -> impl Iterator<Item = ItemKind> {
        Self::ALL.into_iter().filter(move |kind| kind.group() == group)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownItemKind(s.to_string()))
    }
}

/// An item placed in the room
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementItem {
    pub kind: ItemKind,
    pub position: Vec3,
    /// Euler rotation (x, y, z); only y (yaw) changes after placement
    pub rotation: Vec3,
}

impl PlacementItem {
    /// Create an item resting on the floor below `point`
    pub fn at(kind: ItemKind, point: Vec3) -> Self {
        Self {
            kind,
            position: Vec3::new(point.x, kind.resting_height(), point.z),
            rotation: Vec3::ZERO,
        }
    }

    /// Rotation about the vertical axis
    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_mounted_set() {
        let wall: Vec<_> = ItemKind::ALL
            .into_iter()
            .filter(|k| k.is_wall_mounted())
            .collect();
        assert_eq!(
            wall,
            vec![
                ItemKind::Painting,
                ItemKind::Poster,
                ItemKind::Pillar,
                ItemKind::Clock
            ]
        );
        assert_eq!(ItemKind::in_group(ItemGroup::WallItem).count(), 4);
        assert_eq!(ItemKind::in_group(ItemGroup::Furniture).count(), 9);
    }

    #[test]
    fn test_resting_heights() {
        for kind in ItemKind::ALL {
            if kind == ItemKind::Rug {
                assert!(kind.resting_height() > 0.0);
            } else {
                assert_eq!(kind.resting_height(), 0.0, "{kind}");
            }
        }
    }

    #[test]
    fn test_name_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(kind.name().parse::<ItemKind>(), Ok(kind));
        }
        assert_eq!(
            "lamp".parse::<ItemKind>(),
            Err(Error::UnknownItemKind("lamp".to_string()))
        );
    }

    #[test]
    fn test_placement_forces_resting_height() {
        let wall_hit = Vec3::new(0.0, 2.7, -5.0);
        let item = PlacementItem::at(ItemKind::Painting, wall_hit);
        assert_eq!(item.position, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(item.rotation, Vec3::ZERO);

        let rug = PlacementItem::at(ItemKind::Rug, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(rug.position.y, RUG_RESTING_HEIGHT);
    }
}
