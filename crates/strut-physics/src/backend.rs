//! Engine-agnostic physics backend trait.
//!
//! Any physics engine implements [`PhysicsBackend`] and is handed to
//! [`StrutPhysicsPlugin::new`](crate::plugin::StrutPhysicsPlugin::new).

use bevy::app::App;

/// Trait that concrete physics engines must implement.
///
/// The backend is responsible for inserting engine-specific resources (the
/// simulation world) and registering its step and sync systems in
/// [`StrutSet::Simulate`](strut_core::StrutSet::Simulate) and
/// [`StrutSet::Sync`](strut_core::StrutSet::Sync).
pub trait PhysicsBackend: Send + Sync + 'static {
    /// Called once during plugin build.
    fn build(&self, app: &mut App);

    /// Human-readable engine name (e.g., "rapier3d").
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_object_safe() {
        fn _accepts_boxed(_: Box<dyn PhysicsBackend>) {}
    }

    struct DummyBackend;

    impl PhysicsBackend for DummyBackend {
        fn build(&self, _app: &mut App) {}
        fn name(&self) -> &str {
            "dummy"
        }
    }

    #[test]
    fn dummy_backend_can_be_boxed() {
        let backend: Box<dyn PhysicsBackend> = Box::new(DummyBackend);
        assert_eq!(backend.name(), "dummy");
    }
}
