//! Named contact materials shared by reference across bodies.

use std::sync::Arc;

// ---------------------------------------------------------------------------
// PhysicsMaterial
// ---------------------------------------------------------------------------

/// A named friction/restitution pair.
///
/// Materials are immutable once created and shared by `Arc` across every
/// body that uses them.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsMaterial {
    pub name: String,
    pub friction: f32,
    pub restitution: f32,
}

impl PhysicsMaterial {
    /// Create a new shared material.
    #[must_use]
    pub fn new(name: impl Into<String>, friction: f32, restitution: f32) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            friction,
            restitution,
        })
    }

    /// The default ground material with the given friction and no bounce.
    #[must_use]
    pub fn ground(friction: f32) -> Arc<Self> {
        Self::new("ground", friction, 0.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
