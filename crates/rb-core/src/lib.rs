//! Room Builder core
//!
//! Scene model for furnishing a square room: the item catalog, placement,
//! selection and removal commands, rotation with wall snapping, and the
//! camera containment rule. Rendering and pointer picking live outside this
//! crate and talk to it through [`SceneState`] commands and
//! [`SceneSnapshot`]s.

pub mod camera;
pub mod constants;
pub mod drawable;
pub mod error;
pub mod item;
pub mod primitive;
pub mod room;
pub mod scene;
pub mod snap;
pub mod snapshot;

pub use camera::{CameraPose, camera_bounds, constrain_camera};
pub use drawable::{
    DrawPart, Shape, SurfaceDescriptor, item_local_bounds, item_parts, item_transform, room_shell,
};
pub use error::{Error, Result};
pub use item::{ItemGroup, ItemKind, PlacementItem};
pub use room::{RoomConfig, RoomSize, Surface, Wall, WallColor};
pub use scene::{HitTarget, PointerOutcome, SceneState};
pub use snap::{RotateDirection, RotationOutcome};
pub use snapshot::{ItemDescriptor, SceneSnapshot};
