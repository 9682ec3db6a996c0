//! Per-frame physics step and the one-way pose sync pass.

use bevy::prelude::*;

use strut_core::time::SimTime;

use super::context::PhysicsWorld;
use super::math::from_isometry;

/// Advance the physics world by one fixed timestep.
pub fn step_system(mut physics: ResMut<PhysicsWorld>, mut time: ResMut<SimTime>) {
    physics.step();
    time.advance_secs(f64::from(physics.dt()));
}

/// Copy each bound body's pose into its render entity transform.
///
/// Data flows strictly from simulation to render mirror. Root bindings get
/// the body pose verbatim; parented bindings are pre-multiplied by the
/// parent's inverse so the local transform lands at the same world pose.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_poses_system(physics: Res<PhysicsWorld>, mut transforms: Query<&mut Transform>) {
    for binding in physics.bindings() {
        let Some(pose) = physics.body_pose(binding.body) else {
            continue;
        };
        let Ok(mut transform) = transforms.get_mut(binding.entity) else {
            continue;
        };

        let (translation, rotation) = match binding.parent_inverse {
            Some(parent_inverse) => from_isometry(&(parent_inverse * pose)),
            None => from_isometry(&pose),
        };
        transform.translation = translation;
        transform.rotation = rotation;
    }
}
