//! Top-level Bevy plugin integrating the full strut stack.
//!
//! [`StrutSimPlugin`] is a convenience meta-plugin that adds the core and
//! physics plugins in one call. [`SceneBuilder`] layers a fluent API on top:
//! queue assets, build, and get back a ready-to-step [`BoundScene`].
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use strut_sim::StrutSimPlugin;
//!
//! App::new()
//!     .add_plugins(StrutSimPlugin)
//!     .run();
//! ```

pub mod builder;

#[cfg(test)]
mod headless;

use bevy::prelude::*;

use strut_physics::StrutPhysicsPlugin;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use builder::{BoundScene, SceneBuilder};

// ---------------------------------------------------------------------------
// StrutSimPlugin
// ---------------------------------------------------------------------------

/// Meta-plugin that adds the full strut simulation stack.
///
/// Includes:
/// - [`StrutCorePlugin`](strut_core::StrutCorePlugin) — system ordering and `SimTime`
/// - [`StrutPhysicsPlugin`] with the rapier backend — step and pose sync
///
/// Does NOT include any render or windowing plugins; the render mirror is
/// plain `Transform` data for an external consumer.
pub struct StrutSimPlugin;

impl Plugin for StrutSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(strut_core::StrutCorePlugin)
            .add_plugins(StrutPhysicsPlugin::default());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
