//! Part tables for every item kind

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

use super::{DrawPart, Shape};

const fn cube(size: [f32; 3], offset: [f32; 3], color: u32) -> DrawPart {
    DrawPart::new(Shape::Box { size }, offset, color)
}

const fn rod(radius: f32, height: f32, offset: [f32; 3], color: u32) -> DrawPart {
    DrawPart::new(Shape::Cylinder { radius, height }, offset, color)
}

const SIENNA: u32 = 0xa0522d;
const PERU: u32 = 0xcd853f;
const TEAL: u32 = 0x008080;

pub(super) const CHAIR: &[DrawPart] = &[
    // Seat
    cube([1.0, 0.1, 1.0], [0.0, 0.5, 0.0], SIENNA),
    // Backrest
    cube([1.0, 1.0, 0.1], [0.0, 1.0, -0.45], SIENNA),
    // Legs
    rod(0.05, 0.5, [0.45, 0.25, 0.45], SIENNA),
    rod(0.05, 0.5, [-0.45, 0.25, 0.45], SIENNA),
    rod(0.05, 0.5, [0.45, 0.25, -0.45], SIENNA),
    rod(0.05, 0.5, [-0.45, 0.25, -0.45], SIENNA),
];

pub(super) const TABLE: &[DrawPart] = &[
    cube([2.0, 0.1, 2.0], [0.0, 1.0, 0.0], PERU),
    rod(0.05, 1.0, [0.9, 0.5, 0.9], PERU),
    rod(0.05, 1.0, [-0.9, 0.5, 0.9], PERU),
    rod(0.05, 1.0, [0.9, 0.5, -0.9], PERU),
    rod(0.05, 1.0, [-0.9, 0.5, -0.9], PERU),
];

pub(super) const DRESSER: &[DrawPart] = &[
    cube([2.0, 2.0, 1.0], [0.0, 1.0, 0.0], 0x8b4513),
    // Drawer fronts
    cube([1.8, 0.5, 0.1], [0.0, 1.5, 0.55], SIENNA),
    cube([1.8, 0.5, 0.1], [0.0, 1.0, 0.55], SIENNA),
    cube([1.8, 0.5, 0.1], [0.0, 0.5, 0.55], SIENNA),
];

pub(super) const SOFA: &[DrawPart] = &[
    cube([2.0, 0.5, 1.0], [0.0, 0.25, 0.0], TEAL),
    cube([2.0, 1.0, 0.2], [0.0, 0.75, -0.4], TEAL),
    // Armrests
    cube([0.2, 0.5, 1.0], [-0.9, 0.5, 0.0], TEAL),
    cube([0.2, 0.5, 1.0], [0.9, 0.5, 0.0], TEAL),
];

pub(super) const BED: &[DrawPart] = &[
    // Frame
    cube([2.2, 0.4, 3.0], [0.0, 0.2, 0.0], 0x5d4037),
    // Mattress
    cube([2.0, 0.2, 2.8], [0.0, 0.5, 0.0], 0xeceff1),
    // Pillow
    cube([1.6, 0.1, 0.5], [0.0, 0.65, -1.1], 0xffffff),
    // Blanket
    cube([1.9, 0.05, 1.8], [0.0, 0.62, 0.4], 0x3f51b5),
    // Headboard
    cube([2.2, 1.0, 0.1], [0.0, 0.5, -1.45], 0x3e2723),
];

pub(super) const RUG: &[DrawPart] = &[DrawPart::new(
    Shape::Plane {
        width: 3.0,
        height: 2.0,
    },
    [0.0, 0.0, 0.0],
    0xd2b48c,
)
.rotated([-FRAC_PI_2, 0.0, 0.0])
.two_sided()];

pub(super) const BOOKSHELF: &[DrawPart] = &[
    // Sides
    cube([0.1, 2.0, 0.4], [-0.45, 1.0, 0.0], 0x6d4c41),
    cube([0.1, 2.0, 0.4], [0.45, 1.0, 0.0], 0x6d4c41),
    // Top and bottom boards
    cube([1.0, 0.1, 0.4], [0.0, 1.95, 0.0], 0x6d4c41),
    cube([1.0, 0.1, 0.4], [0.0, 0.05, 0.0], 0x6d4c41),
    // Back panel
    cube([0.8, 1.8, 0.04], [0.0, 1.0, -0.18], 0x5d4037),
    // Shelves
    cube([0.8, 0.05, 0.36], [0.0, 0.7, 0.0], 0x8d6e63),
    cube([0.8, 0.05, 0.36], [0.0, 1.35, 0.0], 0x8d6e63),
    // Books
    cube([0.12, 0.5, 0.28], [-0.28, 0.35, 0.0], 0xc62828),
    cube([0.1, 0.45, 0.28], [-0.16, 0.325, 0.0], 0x2e7d32),
    cube([0.14, 0.52, 0.28], [-0.02, 0.36, 0.0], 0x1565c0),
    cube([0.12, 0.48, 0.28], [-0.2, 0.97, 0.0], 0xf9a825),
    cube([0.1, 0.44, 0.28], [0.2, 0.945, 0.0], 0x6a1b9a),
    cube([0.12, 0.5, 0.28], [0.05, 1.625, 0.0], 0x00838f),
];

pub(super) const FLOOR_LAMP: &[DrawPart] = &[
    // Base
    rod(0.25, 0.05, [0.0, 0.025, 0.0], 0x424242),
    // Pole
    rod(0.03, 1.6, [0.0, 0.85, 0.0], 0x9e9e9e),
    // Shade
    rod(0.25, 0.35, [0.0, 1.75, 0.0], 0xfff3e0),
];

pub(super) const DESK_WITH_MONITOR: &[DrawPart] = &[
    // Desktop
    cube([1.6, 0.06, 0.8], [0.0, 0.75, 0.0], 0x795548),
    // Legs
    rod(0.04, 0.72, [0.72, 0.36, 0.32], 0x4e342e),
    rod(0.04, 0.72, [-0.72, 0.36, 0.32], 0x4e342e),
    rod(0.04, 0.72, [0.72, 0.36, -0.32], 0x4e342e),
    rod(0.04, 0.72, [-0.72, 0.36, -0.32], 0x4e342e),
    // Monitor foot, stand, housing and screen
    cube([0.3, 0.02, 0.2], [0.0, 0.79, -0.2], 0x212121),
    cube([0.08, 0.3, 0.06], [0.0, 0.95, -0.22], 0x212121),
    cube([0.9, 0.5, 0.04], [0.0, 1.3, -0.2], 0x212121),
    cube([0.84, 0.44, 0.01], [0.0, 1.3, -0.175], 0x1e88e5),
    // Keyboard
    cube([0.5, 0.02, 0.15], [0.0, 0.79, 0.15], 0xbdbdbd),
];

pub(super) const PAINTING: &[DrawPart] = &[
    // Frame backing
    cube([2.0, 1.0, 0.1], [0.0, 1.0, 0.0], 0x5a3d2b),
    // Frame border
    cube([1.8, 0.8, 0.02], [0.0, 1.0, 0.06], 0xd4c7b2),
    // Canvas
    cube([1.7, 0.7, 0.01], [0.0, 1.0, 0.08], 0x264653),
    // Abstract strokes
    cube([0.8, 0.1, 0.01], [-0.5, 1.1, 0.09], 0xe9c46a).rotated([0.0, 0.0, FRAC_PI_6]),
    cube([0.6, 0.1, 0.01], [0.4, 0.9, 0.09], 0xe76f51).rotated([0.0, 0.0, -FRAC_PI_4]),
];

pub(super) const POSTER: &[DrawPart] = &[
    cube([1.5, 2.0, 0.05], [0.0, 1.5, 0.0], 0xf8f9fa),
    cube([1.3, 0.6, 0.01], [0.0, 2.0, 0.03], 0x212529),
    cube([1.3, 0.8, 0.01], [0.0, 1.0, 0.03], 0xadb5bd),
    // Title band
    cube([1.0, 0.2, 0.01], [0.0, 1.5, 0.04], 0xe63946),
];

pub(super) const PILLAR: &[DrawPart] = &[
    cube([0.5, 4.0, 0.5], [0.0, 2.0, 0.0], 0x6c757d),
    // Capital
    cube([0.7, 0.3, 0.7], [0.0, 3.85, 0.0], 0xdee2e6),
    // Base
    cube([0.7, 0.3, 0.7], [0.0, 0.15, 0.0], 0xdee2e6),
];

pub(super) const CLOCK: &[DrawPart] = &[
    // Backing frame
    cube([1.5, 1.5, 0.1], [0.0, 1.0, 0.0], 0xced4da),
    // Face
    DrawPart::new(Shape::Disc { radius: 0.6 }, [0.0, 1.0, 0.055], 0xffffff),
    // Hour hand
    cube([0.05, 0.3, 0.01], [0.0, 1.0, 0.065], 0x000000).rotated([0.0, 0.0, -FRAC_PI_4]),
    // Minute hand
    cube([0.03, 0.45, 0.01], [0.0, 1.0, 0.07], 0x000000).rotated([0.0, 0.0, FRAC_PI_6]),
    // Center pin
    rod(0.03, 0.02, [0.0, 1.0, 0.08], 0xe63946).rotated([FRAC_PI_2, 0.0, 0.0]),
];
