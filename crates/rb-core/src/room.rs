//! Room configuration: size, wall color and the geometry derived from them

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WALL_COLOR, WALL_STANDOFF};
use crate::error::Error;

/// Edge length of the square room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RoomSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl RoomSize {
    /// All selectable sizes, smallest first
    pub const ALL: [RoomSize; 3] = [RoomSize::Small, RoomSize::Medium, RoomSize::Large];

    /// Edge length in world units
    pub fn edge(self) -> f32 {
        self.units() as f32
    }

    /// Half of the edge length (distance from the center to each wall)
    pub fn half(self) -> f32 {
        self.edge() / 2.0
    }

    /// Edge length as an integer
    pub fn units(self) -> u32 {
        match self {
            RoomSize::Small => 8,
            RoomSize::Medium => 10,
            RoomSize::Large => 15,
        }
    }

    /// Label for the size selector
    pub fn label(self) -> String {
        let n = self.units();
        format!("{n}\u{00d7}{n}")
    }
}

impl TryFrom<u32> for RoomSize {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(RoomSize::Small),
            10 => Ok(RoomSize::Medium),
            15 => Ok(RoomSize::Large),
            other => Err(Error::InvalidRoomSize(other)),
        }
    }
}

impl From<RoomSize> for u32 {
    fn from(size: RoomSize) -> Self {
        size.units()
    }
}

/// Wall color as an sRGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WallColor(pub [u8; 3]);

impl WallColor {
    pub fn rgb(self) -> [u8; 3] {
        self.0
    }
}

impl Default for WallColor {
    fn default() -> Self {
        Self(DEFAULT_WALL_COLOR)
    }
}

impl fmt::Display for WallColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for WallColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl TryFrom<String> for WallColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WallColor> for String {
    fn from(color: WallColor) -> Self {
        color.to_string()
    }
}

/// One of the four walls, named by compass direction.
///
/// Declaration order is the snap candidate order: ascending facing yaw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wall {
    /// Wall at z = -half
    South,
    /// Wall at x = -half
    West,
    /// Wall at z = +half
    North,
    /// Wall at x = +half
    East,
}

impl Wall {
    /// All walls in ascending facing-yaw order
    pub const ALL: [Wall; 4] = [Wall::South, Wall::West, Wall::North, Wall::East];

    /// Yaw an item must have to face into the room from this wall
    pub fn facing_yaw(self) -> f32 {
        match self {
            Wall::South => 0.0,
            Wall::West => FRAC_PI_2,
            Wall::North => PI,
            Wall::East => 3.0 * FRAC_PI_2,
        }
    }

    /// Unit normal of the wall plane pointing into the room
    pub fn inward_normal(self) -> Vec3 {
        match self {
            Wall::South => Vec3::Z,
            Wall::West => Vec3::X,
            Wall::North => Vec3::NEG_Z,
            Wall::East => Vec3::NEG_X,
        }
    }

    /// Signed coordinate of the wall plane along its axis
    pub fn plane_offset(self, half: f32) -> f32 {
        match self {
            Wall::South | Wall::West => -half,
            Wall::North | Wall::East => half,
        }
    }

    /// Move `position` up against this wall, leaving the other coordinates alone
    pub fn against(self, position: Vec3, half: f32) -> Vec3 {
        let inset = match self {
            Wall::South | Wall::West => -half + WALL_STANDOFF,
            Wall::North | Wall::East => half - WALL_STANDOFF,
        };
        match self {
            Wall::South | Wall::North => Vec3::new(position.x, position.y, inset),
            Wall::West | Wall::East => Vec3::new(inset, position.y, position.z),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Wall::South => "south",
            Wall::West => "west",
            Wall::North => "north",
            Wall::East => "east",
        }
    }
}

/// A face of the room shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Floor,
    Ceiling,
    Wall(Wall),
}

impl Surface {
    /// Whether clicking this surface may place the armed item
    pub fn is_placement_target(self) -> bool {
        !matches!(self, Surface::Ceiling)
    }
}

/// Room size and wall color.
///
/// Every derived quantity is computed from the current size when asked for.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomConfig {
    size: RoomSize,
    wall_color: WallColor,
}

impl RoomConfig {
    pub fn new(size: RoomSize, wall_color: WallColor) -> Self {
        Self { size, wall_color }
    }

    pub fn size(&self) -> RoomSize {
        self.size
    }

    pub fn wall_color(&self) -> WallColor {
        self.wall_color
    }

    /// Replace the room size
    pub fn set_size(&mut self, size: RoomSize) {
        self.size = size;
    }

    /// Replace the wall color
    pub fn set_wall_color(&mut self, color: WallColor) {
        self.wall_color = color;
    }

    /// Edge length (also the ceiling height)
    pub fn edge(&self) -> f32 {
        self.size.edge()
    }

    /// Half-extent: offset of each wall plane from the room center
    pub fn half(&self) -> f32 {
        self.size.half()
    }

    /// Signed coordinate of a wall plane for the current size
    pub fn wall_plane_offset(&self, wall: Wall) -> f32 {
        wall.plane_offset(self.half())
    }
}
