//! Convex polygon clipping against half-spaces

use glam::Vec3;

/// Clip a convex polygon to the half-space `normal · p <= offset`
///
/// Sutherland-Hodgman for a single plane. Points on the plane are kept.
pub fn clip_polygon(polygon: &[Vec3], normal: Vec3, offset: f32) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(polygon.len() + 1);
    let distance = |p: Vec3| normal.dot(p) - offset;

    for (i, &current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let (d_current, d_next) = (distance(current), distance(next));

        if d_current <= 0.0 {
            out.push(current);
        }
        if (d_current <= 0.0) != (d_next <= 0.0) {
            let t = d_current / (d_current - d_next);
            out.push(current.lerp(next, t));
        }
    }

    out
}

/// Clip a convex polygon to the axis-aligned box `min..=max`
pub fn clip_to_box(polygon: &[Vec3], min: Vec3, max: Vec3) -> Vec<Vec3> {
    let planes = [
        (Vec3::X, max.x),
        (Vec3::NEG_X, -min.x),
        (Vec3::Y, max.y),
        (Vec3::NEG_Y, -min.y),
        (Vec3::Z, max.z),
        (Vec3::NEG_Z, -min.z),
    ];

    let mut polygon = polygon.to_vec();
    for (normal, offset) in planes {
        if polygon.len() < 3 {
            return Vec::new();
        }
        polygon = clip_polygon(&polygon, normal, offset);
    }
    polygon
}
