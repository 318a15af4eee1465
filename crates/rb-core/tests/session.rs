use std::f32::consts::FRAC_PI_2;

use approx::assert_abs_diff_eq;
use glam::Vec3;
use rb_core::{
    HitTarget, ItemKind, PointerOutcome, RoomSize, RotateDirection, SceneState, Surface, Wall,
    WallColor,
};

#[test]
fn furnish_a_room() {
    let mut scene = SceneState::default();
    assert_eq!(scene.room().size(), RoomSize::Medium);
    assert_eq!(scene.room().wall_color().to_string(), "#8b0000");

    // Click the floor before arming anything
    let floor = HitTarget::Surface(Surface::Floor);
    assert_eq!(
        scene.pointer_down(Vec3::new(1.0, 0.0, 1.0), floor),
        PointerOutcome::Ignored
    );

    // Bed on the floor, painting on the south wall
    scene.arm(ItemKind::Bed);
    assert_eq!(
        scene.pointer_down(Vec3::new(2.0, 0.0, 2.0), floor),
        PointerOutcome::Placed(0)
    );
    scene.arm(ItemKind::Painting);
    let south = HitTarget::Surface(Surface::Wall(Wall::South));
    assert_eq!(
        scene.pointer_down(Vec3::new(0.0, 2.5, -5.0), south),
        PointerOutcome::Placed(1)
    );

    // Select the painting through its geometry and turn it twice to the left
    assert_eq!(
        scene.pointer_down(Vec3::new(0.0, 1.0, -4.95), HitTarget::Item(1)),
        PointerOutcome::Selected(1)
    );
    scene.rotate_selected(RotateDirection::Left);
    let outcome = scene.rotate_selected(RotateDirection::Left).unwrap();
    assert_eq!(outcome.snapped, Some(Wall::West));

    let snapshot = scene.snapshot();
    let painting = snapshot.items[1];
    assert_eq!(painting.rotation, Vec3::new(0.0, FRAC_PI_2, 0.0));
    assert_abs_diff_eq!(painting.position.x, -4.94, epsilon = 1e-6);
    assert_eq!(painting.position.z, -5.0);
    assert_eq!(snapshot.selected, Some(1));

    // Remove the bed; the painting shifts down to index 0
    scene.select(0);
    let removed = scene.remove_selected().unwrap();
    assert_eq!(removed.kind, ItemKind::Bed);
    assert_eq!(scene.items()[0].kind, ItemKind::Painting);
    assert_eq!(scene.selected(), None);

    // Stale index from the old snapshot is ignored
    assert!(!scene.select(1));
    assert_eq!(scene.remove_selected(), None);

    // Room edits only touch the room
    scene.set_room_size(RoomSize::Small);
    scene.set_wall_color(WallColor([0x33, 0x66, 0x99]));
    assert_eq!(scene.room().half(), 4.0);
    assert_eq!(scene.items().len(), 1);
}

#[test]
fn snapshot_reports_armed_kind() {
    let mut scene = SceneState::default();
    scene.arm(ItemKind::DeskWithMonitor);
    scene.place_at(Vec3::ZERO);
    scene.arm(ItemKind::FloorLamp);

    let snapshot = scene.snapshot();
    assert_eq!(snapshot.items[0].kind.name(), "desk-with-monitor");
    assert_eq!(snapshot.armed.map(|k| k.name()), Some("floor-lamp"));
}
