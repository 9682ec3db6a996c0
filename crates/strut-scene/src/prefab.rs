//! Actor prefabs and the type → prefab lookup table.
//!
//! A prefab is a reusable sub-graph loaded once per actor type and shared
//! read-only by every instance. Hinge anchors and axes are prefab data:
//! they are tuning parameters of the asset, never derived in code.

use std::collections::HashMap;
use std::sync::Arc;

use bevy::math::Vec3;
use bevy::transform::components::Transform;

use strut_core::material::PhysicsMaterial;

use crate::types::MeshData;

// ---------------------------------------------------------------------------
// HingeSpec
// ---------------------------------------------------------------------------

/// Hinge joint geometry between a composite actor's chassis and one sub-part.
///
/// Anchors and axes are expressed in each body's local frame, as supplied by
/// the prefab asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HingeSpec {
    /// Anchor point in the chassis body's local frame.
    pub body_anchor: Vec3,
    /// Anchor point in the sub-part body's local frame.
    pub part_anchor: Vec3,
    /// Rotation axis in the chassis body's local frame.
    pub body_axis: Vec3,
    /// Rotation axis in the sub-part body's local frame.
    pub part_axis: Vec3,
}

impl HingeSpec {
    /// Hinge rolling about the X axis, anchored at `body_anchor` on the
    /// chassis and at the sub-part's origin. The common case for wheels.
    #[must_use]
    pub const fn rolling_x(body_anchor: Vec3) -> Self {
        Self {
            body_anchor,
            part_anchor: Vec3::ZERO,
            body_axis: Vec3::X,
            part_axis: Vec3::X,
        }
    }
}

// ---------------------------------------------------------------------------
// PartTemplate
// ---------------------------------------------------------------------------

/// Template for one sub-part of an actor prefab.
#[derive(Debug, Clone)]
pub struct PartTemplate {
    /// Symbolic sub-part name, e.g. `body` or `w_fl`.
    pub name: String,
    /// Transform relative to the anchor node.
    pub local_transform: Transform,
    /// Part geometry; dynamic collision uses its bounding box.
    pub mesh: MeshData,
    /// Body mass in kg; must be positive for prefab parts.
    pub mass: f32,
    /// Hinge wiring to the chassis, present on vehicle wheels.
    pub hinge: Option<HingeSpec>,
    /// Contact material override; the world default applies when absent.
    pub material: Option<Arc<PhysicsMaterial>>,
}

impl PartTemplate {
    /// Create a part with the given name, geometry, and mass.
    #[must_use]
    pub fn new(name: impl Into<String>, mesh: MeshData, mass: f32) -> Self {
        Self {
            name: name.into(),
            local_transform: Transform::IDENTITY,
            mesh,
            mass,
            hinge: None,
            material: None,
        }
    }

    /// Set the transform relative to the anchor.
    #[must_use]
    pub fn at(mut self, local_transform: Transform) -> Self {
        self.local_transform = local_transform;
        self
    }

    /// Attach a hinge to the chassis.
    #[must_use]
    pub const fn with_hinge(mut self, hinge: HingeSpec) -> Self {
        self.hinge = Some(hinge);
        self
    }

    /// Override the contact material.
    #[must_use]
    pub fn with_material(mut self, material: Arc<PhysicsMaterial>) -> Self {
        self.material = Some(material);
        self
    }
}

// ---------------------------------------------------------------------------
// ActorPrefab
// ---------------------------------------------------------------------------

/// A named, reusable collection of sub-part templates.
#[derive(Debug, Clone)]
pub struct ActorPrefab {
    /// Actor type identifier matched against node metadata tags.
    pub actor_type: String,
    /// Sub-parts in authored order.
    pub parts: Vec<PartTemplate>,
}

impl ActorPrefab {
    /// Create an empty prefab for the given actor type.
    #[must_use]
    pub fn new(actor_type: impl Into<String>) -> Self {
        Self {
            actor_type: actor_type.into(),
            parts: Vec::new(),
        }
    }

    /// Append a sub-part template.
    #[must_use]
    pub fn with_part(mut self, part: PartTemplate) -> Self {
        self.parts.push(part);
        self
    }

    /// Look up a part template by symbolic name.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&PartTemplate> {
        self.parts.iter().find(|part| part.name == name)
    }

    /// Whether any part carries hinge wiring, i.e. the prefab is a
    /// composite vehicle that must go through constraint validation.
    #[must_use]
    pub fn has_hinges(&self) -> bool {
        self.parts.iter().any(|part| part.hinge.is_some())
    }
}

// ---------------------------------------------------------------------------
// PrefabRegistry
// ---------------------------------------------------------------------------

/// Actor type → prefab lookup table.
///
/// Populated once behind the asset barrier; read-only after the resolution
/// pass begins.
#[derive(Debug, Default)]
pub struct PrefabRegistry {
    prefabs: HashMap<String, Arc<ActorPrefab>>,
}

impl PrefabRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prefab under its actor type. A later registration for the
    /// same type replaces the earlier one.
    pub fn register(&mut self, prefab: ActorPrefab) {
        self.prefabs
            .insert(prefab.actor_type.clone(), Arc::new(prefab));
    }

    /// Resolve an actor type to its prefab.
    #[must_use]
    pub fn resolve(&self, actor_type: &str) -> Option<Arc<ActorPrefab>> {
        self.prefabs.get(actor_type).cloned()
    }

    /// Number of registered prefabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefabs.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefabs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
