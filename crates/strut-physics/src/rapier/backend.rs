//! [`RapierBackend`] — concrete physics backend using raw `rapier3d`.

use bevy::prelude::*;

use strut_core::config::WorldConfig;
use strut_core::StrutSet;

use crate::backend::PhysicsBackend;

use super::context::PhysicsWorld;
use super::systems::{step_system, sync_poses_system};

/// Raw rapier3d physics backend.
///
/// Inserts a [`PhysicsWorld`] resource built from [`WorldConfig`] and
/// registers the step and pose sync systems in [`StrutSet::Simulate`] and
/// [`StrutSet::Sync`] on the `Update` schedule. The frame driver owns the
/// cadence; one `Update` pass is one fixed timestep.
#[derive(Debug, Default)]
pub struct RapierBackend;

impl PhysicsBackend for RapierBackend {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<WorldConfig>() {
            app.insert_resource(WorldConfig::default());
        }
        let config = app.world().resource::<WorldConfig>().clone();
        app.insert_resource(PhysicsWorld::new(&config));

        app.add_systems(Update, step_system.in_set(StrutSet::Simulate));
        app.add_systems(Update, sync_poses_system.in_set(StrutSet::Sync));
    }

    fn name(&self) -> &str {
        "rapier3d"
    }
}
