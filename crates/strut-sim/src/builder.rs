//! Scene builder for constructing a fully bound Bevy [`App`].
//!
//! [`SceneBuilder`] provides a fluent API for composing a simulation: a
//! scene document, prefabs, and world configuration. `build()` runs the
//! resolution pass and returns a [`BoundScene`] ready to step.
//!
//! # Example
//!
//! ```no_run
//! use strut_sim::SceneBuilder;
//! use strut_scene::types::SceneDocument;
//!
//! let mut scene = SceneBuilder::new()
//!     .with_scene(SceneDocument::new("empty"))
//!     .build()
//!     .unwrap();
//! scene.run_frames(60);
//! ```

use bevy::prelude::*;

use strut_core::config::WorldConfig;
use strut_core::error::StrutError;
use strut_core::time::SimTime;
use strut_physics::prelude::{PhysicsWorld, ResolvedScene, resolve_scene};
use strut_scene::loader::LoadedAssets;
use strut_scene::prefab::{ActorPrefab, PrefabRegistry};
use strut_scene::types::SceneDocument;

use crate::StrutSimPlugin;

// ---------------------------------------------------------------------------
// BoundScene
// ---------------------------------------------------------------------------

/// Result of building a scene — the Bevy app plus the resolution outcome.
pub struct BoundScene {
    /// The fully configured Bevy application.
    pub app: App,
    /// Actors and static bodies registered during resolution.
    pub resolved: ResolvedScene,
}

impl BoundScene {
    /// Advance the simulation by `frames` fixed steps, syncing poses after
    /// each one.
    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    /// The simulation clock.
    #[must_use]
    pub fn sim_time(&self) -> SimTime {
        *self.app.world().resource::<SimTime>()
    }

    /// Shared access to the physics world resource.
    #[must_use]
    pub fn physics(&self) -> &PhysicsWorld {
        self.app.world().resource::<PhysicsWorld>()
    }
}

// ---------------------------------------------------------------------------
// SceneBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for constructing a complete strut simulation.
#[derive(Default)]
pub struct SceneBuilder {
    config: Option<WorldConfig>,
    scene: Option<SceneDocument>,
    prefabs: Vec<ActorPrefab>,
    registry_override: Option<PrefabRegistry>,
    logging: bool,
}

impl SceneBuilder {
    /// Create a new scene builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the world configuration.
    #[must_use]
    pub fn with_config(mut self, config: WorldConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the scene document to resolve.
    #[must_use]
    pub fn with_scene(mut self, scene: SceneDocument) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Register one actor prefab.
    #[must_use]
    pub fn with_prefab(mut self, prefab: ActorPrefab) -> Self {
        self.prefabs.push(prefab);
        self
    }

    /// Install the tracing log subscriber on the built app. Off by default
    /// so embedding hosts and tests keep their own subscriber.
    #[must_use]
    pub fn with_logging(mut self) -> Self {
        self.logging = true;
        self
    }

    /// Take the scene and prefabs from a completed asset barrier.
    #[must_use]
    pub fn with_assets(mut self, assets: LoadedAssets) -> Self {
        self.scene = Some(assets.scene);
        self.registry_override = Some(assets.registry);
        self
    }

    /// Build the Bevy [`App`], run the resolution pass, and return the
    /// bound scene.
    ///
    /// # Errors
    ///
    /// Returns [`StrutError`] when an actor instance fails constraint
    /// validation or carries unusable geometry.
    pub fn build(self) -> Result<BoundScene, StrutError> {
        let mut app = App::new();
        if self.logging {
            app.add_plugins(bevy::log::LogPlugin::default());
        }
        if let Some(config) = self.config {
            config.validate()?;
            app.insert_resource(config);
        }
        app.add_plugins(StrutSimPlugin);
        app.finish();
        app.cleanup();

        let mut registry = self.registry_override.unwrap_or_default();
        for prefab in self.prefabs {
            registry.register(prefab);
        }
        let scene = self.scene.unwrap_or_default();

        let mut physics = app
            .world_mut()
            .remove_resource::<PhysicsWorld>()
            .unwrap_or_else(|| PhysicsWorld::new(&WorldConfig::default()));
        let result = resolve_scene(&mut physics, app.world_mut(), &scene, &registry);
        app.insert_resource(physics);
        let resolved = result?;

        Ok(BoundScene { app, resolved })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use strut_test_utils::{cube_prefab, demo_scene, ground_scene};

    #[test]
    fn build_empty_scene() {
        let scene = SceneBuilder::new().build().unwrap();
        assert!(scene.resolved.actors.is_empty());
        assert!(scene.resolved.static_bodies.is_empty());
    }

    #[test]
    fn build_static_only_scene() {
        let scene = SceneBuilder::new().with_scene(ground_scene()).build().unwrap();
        assert_eq!(scene.resolved.static_bodies.len(), 1);
        assert_eq!(scene.physics().body_count(), 1);
    }

    #[test]
    fn build_with_custom_config() {
        let config = WorldConfig {
            gravity: [0.0, -1.62, 0.0],
            ..WorldConfig::default()
        };
        let scene = SceneBuilder::new().with_config(config).build().unwrap();
        assert_eq!(scene.physics().gravity().y, -1.62);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = WorldConfig {
            fixed_dt: 0.0,
            ..WorldConfig::default()
        };
        assert!(matches!(
            SceneBuilder::new().with_config(config).build(),
            Err(StrutError::Config(_))
        ));
    }

    #[test]
    fn run_frames_advances_the_clock() {
        let mut scene = SceneBuilder::new()
            .with_scene(demo_scene())
            .with_prefab(cube_prefab())
            .build()
            .unwrap();

        scene.run_frames(30);
        assert_eq!(scene.sim_time().step_count(1.0 / 60.0), 30);
    }
}
