//! Shared test fixtures for strut crates.
//!
//! Provides reusable mesh buffers, actor prefabs, and scene documents so
//! integration tests across the workspace exercise the same geometry.

pub mod meshes;
pub mod prefabs;
pub mod scenes;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use meshes::{box_mesh, cube_mesh, ground_mesh, unindexed_box_mesh};
pub use prefabs::{car_prefab, cube_prefab, incomplete_car_prefab};
pub use scenes::{demo_scene, ground_scene, two_car_scene};
