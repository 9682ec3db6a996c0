//! The physics plugin that delegates to a concrete backend.

use bevy::app::{App, Plugin};

use crate::backend::PhysicsBackend;

/// Bevy plugin that wires a [`PhysicsBackend`] into the app.
///
/// # Usage
///
/// ```ignore
/// app.add_plugins(StrutPhysicsPlugin::new(RapierBackend));
/// ```
pub struct StrutPhysicsPlugin {
    backend: Box<dyn PhysicsBackend>,
}

impl StrutPhysicsPlugin {
    /// Create a new physics plugin with the given backend.
    pub fn new(backend: impl PhysicsBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// The name of the active physics backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}

impl Default for StrutPhysicsPlugin {
    /// The shipped rapier backend.
    fn default() -> Self {
        Self::new(crate::rapier::RapierBackend)
    }
}

impl Plugin for StrutPhysicsPlugin {
    fn build(&self, app: &mut App) {
        self.backend.build(app);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
