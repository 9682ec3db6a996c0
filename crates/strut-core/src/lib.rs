// strut-core: Errors, config, sim clock, and system ordering for strut.

pub mod config;
pub mod error;
pub mod material;
pub mod time;

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        StrutCorePlugin, StrutSet,
        config::{Broadphase, WorldConfig},
        error::{ActorError, ConfigError, GeometryError, LoadError, StrutError},
        material::PhysicsMaterial,
        time::SimTime,
    };
}

// ---------------------------------------------------------------------------
// StrutSet
// ---------------------------------------------------------------------------

/// System sets defining the per-frame pipeline order.
///
/// The frame is strictly `Simulate` (advance the physics world by one fixed
/// step) then `Sync` (write body poses back into render transforms). The
/// external render pass consumes the transforms after `Sync`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrutSet {
    /// Advance the physics world by exactly one fixed timestep.
    Simulate,
    /// Copy simulated body poses into render node transforms.
    Sync,
}

// ---------------------------------------------------------------------------
// StrutCorePlugin
// ---------------------------------------------------------------------------

/// Registers [`StrutSet`] ordering and the [`SimTime`](time::SimTime) clock.
pub struct StrutCorePlugin;

impl Plugin for StrutCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<time::SimTime>()
            .configure_sets(Update, (StrutSet::Simulate, StrutSet::Sync).chain());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_plugin_inserts_sim_time() {
        let mut app = App::new();
        app.add_plugins(StrutCorePlugin);
        app.update();

        assert!(app.world().get_resource::<time::SimTime>().is_some());
    }

    #[test]
    fn sets_are_distinct() {
        assert_ne!(StrutSet::Simulate, StrutSet::Sync);
    }
}
