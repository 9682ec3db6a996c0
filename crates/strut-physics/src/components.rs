//! Physics marker components.
//!
//! Lightweight ECS markers attached to entities that own a rigid body in the
//! physics world. They let downstream systems query participation without
//! reaching into rapier handles.

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// PhysicsBody
// ---------------------------------------------------------------------------

/// Marker on entities with a rigid body representation.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsBody {
    /// Zero-mass body, never integrated by the solver.
    Fixed,
    /// Body affected by gravity, contacts, and constraints.
    Dynamic,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn component_is_send_sync() {
        assert_send_sync::<PhysicsBody>();
    }

    #[test]
    fn variants_are_distinct() {
        assert_ne!(PhysicsBody::Fixed, PhysicsBody::Dynamic);
    }
}
