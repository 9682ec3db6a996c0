//! Rapier3d backend: context resource, scene bridge, math conversions, and
//! the per-frame step and sync systems.

pub mod backend;
pub mod bridge;
pub mod context;
pub mod math;
pub mod systems;

pub use backend::RapierBackend;
