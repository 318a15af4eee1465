//! Global constants for rb-core

use std::f32::consts::FRAC_PI_4;

/// Yaw change applied by a single rotate command (45 degrees)
pub const ROTATION_STEP: f32 = FRAC_PI_4;

/// Maximum angular distance (radians) at which a wall-mounted item snaps to a wall
pub const SNAP_TOLERANCE: f32 = 0.1;

/// Gap kept between a snapped item and the wall plane
pub const WALL_STANDOFF: f32 = 0.06;

/// Horizontal margin between the camera and the walls
pub const CAMERA_WALL_MARGIN: f32 = 0.1;

/// Minimum camera height, also the gap kept below the ceiling
pub const CAMERA_VERTICAL_MARGIN: f32 = 1.0;

/// Rug lift above the floor (avoids z-fighting with the floor plane)
pub const RUG_RESTING_HEIGHT: f32 = 0.01;

/// Default number of segments for cylinder mesh generation
pub const CYLINDER_SEGMENTS: u32 = 8;

/// Default number of segments for disc mesh generation
pub const DISC_SEGMENTS: u32 = 32;

/// Floor color (sRGB)
pub const FLOOR_COLOR: [u8; 3] = [0xee, 0xee, 0xee];

/// Ceiling color (sRGB)
pub const CEILING_COLOR: [u8; 3] = [0xff, 0xff, 0xff];

/// Default wall color (sRGB, dark red)
pub const DEFAULT_WALL_COLOR: [u8; 3] = [0x8b, 0x00, 0x00];
