// strut-physics: The physics boundary of strut.
//
// Derives collision shapes from raw mesh data, bridges the loaded scene
// graph into rapier rigid bodies and hinge constraints, and syncs simulated
// poses back into render transforms each frame. The `PhysicsBackend` trait
// keeps the concrete engine swappable; `rapier` is the shipped backend.

pub mod backend;
pub mod components;
pub mod plugin;
pub mod rapier;
pub mod shapes;
pub mod vehicle;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        backend::PhysicsBackend,
        components::PhysicsBody,
        plugin::StrutPhysicsPlugin,
        rapier::{
            RapierBackend,
            bridge::{ActorInstance, ResolvedScene, resolve_scene},
            context::{BodySpec, NodeBinding, PhysicsWorld},
        },
        vehicle::{PreparedPart, VehicleRig, VehicleRigBuilder},
    };
}

// Re-export the plugin at crate root for convenience.
pub use plugin::StrutPhysicsPlugin;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #[test]
    fn prelude_exports() {
        use super::prelude::*;

        fn _accepts_backend(_: &dyn PhysicsBackend) {}
        let _body = PhysicsBody::Fixed;
    }
}
