//! Bevy resource wrapping all Rapier3D physics pipeline state.

use std::sync::Arc;

use bevy::prelude::{Entity, Resource};
use nalgebra::{Isometry3, Vector3};
use rapier3d::prelude::{
    CCDSolver, ColliderBuilder, ColliderSet, DefaultBroadPhase, GenericJointBuilder,
    ImpulseJointSet, IntegrationParameters, IslandManager, JointAxesMask, MultibodyJointSet,
    NarrowPhase, PhysicsPipeline, QueryPipeline, RigidBodyBuilder, RigidBodyHandle, RigidBodySet,
    SharedShape,
};

use strut_core::config::WorldConfig;
use strut_core::material::PhysicsMaterial;
use strut_scene::prefab::HingeSpec;

use crate::rapier::math::{to_axis, to_point};

// ---------------------------------------------------------------------------
// BodySpec
// ---------------------------------------------------------------------------

/// Everything needed to create one rigid body and its collider.
///
/// Mass zero means a fixed environment body; positive mass means dynamic.
#[derive(Debug, Clone)]
pub struct BodySpec {
    /// Collision shape.
    pub shape: SharedShape,
    /// Body mass in kg; zero for fixed bodies.
    pub mass: f32,
    /// Contact material for the collider.
    pub material: Arc<PhysicsMaterial>,
    /// World-space pose at creation time.
    pub pose: Isometry3<f32>,
}

// ---------------------------------------------------------------------------
// NodeBinding
// ---------------------------------------------------------------------------

/// One body → render entity link used by the pose sync pass.
///
/// For root-level nodes `parent_inverse` is `None` and the body pose is
/// copied into the transform verbatim. For parented nodes it holds the
/// inverse of the parent's world pose, snapshotted at bind time; parents of
/// bound nodes are static anchors and never move afterwards.
#[derive(Debug, Clone, Copy)]
pub struct NodeBinding {
    /// Rapier body driving the node.
    pub body: RigidBodyHandle,
    /// Render entity receiving the pose.
    pub entity: Entity,
    /// Inverse of the parent's world pose, if the entity is parented.
    pub parent_inverse: Option<Isometry3<f32>>,
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// All rapier state in a single Bevy resource.
///
/// `PhysicsPipeline::step()` requires mutable access to every set
/// simultaneously, so they must all live together.
#[derive(Resource)]
pub struct PhysicsWorld {
    // -- Rapier sets --
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,

    // -- Pipeline objects --
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,

    // -- Parameters --
    integration_parameters: IntegrationParameters,
    gravity: Vector3<f32>,
    default_material: Arc<PhysicsMaterial>,

    // -- Body → entity bindings, in insertion order --
    bindings: Vec<NodeBinding>,
}

impl PhysicsWorld {
    /// Create an empty world from the given configuration.
    #[must_use]
    pub fn new(config: &WorldConfig) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = config.fixed_dt as f32;

        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            integration_parameters,
            gravity: Vector3::new(config.gravity[0], config.gravity[1], config.gravity[2]),
            default_material: PhysicsMaterial::ground(config.default_friction),
            bindings: Vec::new(),
        }
    }

    /// Insert one rigid body with its collider.
    ///
    /// Zero mass produces a fixed body; positive mass produces a dynamic
    /// body with the collider's mass set explicitly.
    pub fn insert_body(&mut self, spec: BodySpec) -> RigidBodyHandle {
        let dynamic = spec.mass > 0.0;
        let builder = if dynamic {
            RigidBodyBuilder::dynamic()
        } else {
            RigidBodyBuilder::fixed()
        };
        let handle = self
            .rigid_body_set
            .insert(builder.position(spec.pose).build());

        let mut collider = ColliderBuilder::new(spec.shape)
            .friction(spec.material.friction)
            .restitution(spec.material.restitution);
        if dynamic {
            collider = collider.mass(spec.mass);
        }
        self.collider_set
            .insert_with_parent(collider.build(), handle, &mut self.rigid_body_set);

        handle
    }

    /// Wire a hinge between two bodies using the given anchors and axes.
    ///
    /// Contacts between the jointed pair are disabled; wheel volumes
    /// overlap the chassis and must not be pushed off their anchor.
    pub fn insert_hinge(
        &mut self,
        body1: RigidBodyHandle,
        body2: RigidBodyHandle,
        hinge: &HingeSpec,
    ) {
        let joint = GenericJointBuilder::new(JointAxesMask::LOCKED_REVOLUTE_AXES)
            .local_anchor1(to_point(hinge.body_anchor))
            .local_anchor2(to_point(hinge.part_anchor))
            .local_axis1(to_axis(hinge.body_axis))
            .local_axis2(to_axis(hinge.part_axis))
            .contacts_enabled(false)
            .build();
        self.impulse_joint_set.insert(body1, body2, joint, true);
    }

    /// Record a body → render entity binding for the sync pass.
    pub fn bind_node(
        &mut self,
        body: RigidBodyHandle,
        entity: Entity,
        parent_inverse: Option<Isometry3<f32>>,
    ) {
        debug_assert!(
            self.bindings.iter().all(|b| b.body != body),
            "body bound twice"
        );
        self.bindings.push(NodeBinding {
            body,
            entity,
            parent_inverse,
        });
    }

    /// Bindings in insertion order.
    #[must_use]
    pub fn bindings(&self) -> &[NodeBinding] {
        &self.bindings
    }

    /// Advance the simulation by one fixed timestep.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Fixed timestep in seconds.
    #[must_use]
    pub fn dt(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Current world pose of a body.
    #[must_use]
    pub fn body_pose(&self, handle: RigidBodyHandle) -> Option<Isometry3<f32>> {
        self.rigid_body_set.get(handle).map(|body| *body.position())
    }

    /// Teleport a body to the given pose, waking it.
    pub fn set_body_pose(&mut self, handle: RigidBodyHandle, pose: Isometry3<f32>) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_position(pose, true);
        }
    }

    /// Whether a body was inserted as dynamic.
    #[must_use]
    pub fn is_dynamic(&self, handle: RigidBodyHandle) -> bool {
        self.rigid_body_set
            .get(handle)
            .is_some_and(|body| body.is_dynamic())
    }

    /// Number of rigid bodies.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// Number of impulse joints.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.impulse_joint_set.len()
    }

    /// Number of body → entity bindings.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Contact material applied when a spec carries no override.
    #[must_use]
    pub fn default_material(&self) -> Arc<PhysicsMaterial> {
        Arc::clone(&self.default_material)
    }

    /// World gravity vector.
    #[must_use]
    pub fn gravity(&self) -> Vector3<f32> {
        self.gravity
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
