//! Canned actor prefabs mirroring the shipped demo assets.

use bevy::math::Vec3;
use bevy::transform::components::Transform;

use strut_scene::prefab::{ActorPrefab, HingeSpec, PartTemplate};

use crate::meshes::{box_mesh, cube_mesh};

/// Wheel offsets in the chassis frame: front-left, front-right, rear-left,
/// rear-right.
pub const WHEEL_OFFSETS: [(&str, Vec3); 4] = [
    ("w_fl", Vec3::new(-0.9, -0.3, 1.2)),
    ("w_fr", Vec3::new(0.9, -0.3, 1.2)),
    ("w_rl", Vec3::new(-0.9, -0.3, -1.2)),
    ("w_rr", Vec3::new(0.9, -0.3, -1.2)),
];

/// Single-part dynamic cube actor.
#[must_use]
pub fn cube_prefab() -> ActorPrefab {
    ActorPrefab::new("cube").with_part(
        PartTemplate::new("cube", cube_mesh(0.5), 1.0).at(Transform::from_xyz(0.0, 0.5, 0.0)),
    )
}

/// Five-part car: chassis plus four hinged wheels.
///
/// Each wheel hinge is anchored at the wheel's offset in the chassis frame
/// and rolls about the X axis.
#[must_use]
pub fn car_prefab() -> ActorPrefab {
    let mut prefab = ActorPrefab::new("car").with_part(
        PartTemplate::new("body", box_mesh(Vec3::new(1.0, 0.25, 2.0)), 5.0)
            .at(Transform::from_xyz(0.0, 1.0, 0.0)),
    );
    for (name, offset) in WHEEL_OFFSETS {
        prefab = prefab.with_part(
            PartTemplate::new(name, cube_mesh(0.3), 1.0)
                .at(Transform::from_translation(Vec3::new(0.0, 1.0, 0.0) + offset))
                .with_hinge(HingeSpec::rolling_x(offset)),
        );
    }
    prefab
}

/// Car prefab missing one required wheel. Fails constraint validation.
#[must_use]
pub fn incomplete_car_prefab() -> ActorPrefab {
    let mut prefab = car_prefab();
    prefab.parts.retain(|part| part.name != "w_rr");
    prefab
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
