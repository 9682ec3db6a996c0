//! Scene-to-Rapier bridge: walks a loaded scene graph, creates rigid bodies
//! and joints for every physics-relevant node, and records body → entity
//! bindings for the sync pass.
//!
//! Classification is driven entirely by node metadata and geometry:
//! untagged meshes become exact static collision, tagged anchors trigger
//! prefab instantiation, everything else stays render-only.

use std::collections::HashMap;

use bevy::log::{debug, warn};
use bevy::prelude::{Entity, Name, World};
use bevy::ecs::hierarchy::ChildOf;
use nalgebra::Isometry3;
use rapier3d::prelude::RigidBodyHandle;

use strut_core::error::{ActorError, StrutError};
use strut_scene::prefab::{ActorPrefab, PrefabRegistry};
use strut_scene::spawner::{instantiate_prefab, SpawnedActor};
use strut_scene::types::{NodeKind, SceneDocument, SceneNode};

use crate::components::PhysicsBody;
use crate::shapes::{cuboid_from_bounds, static_shape};
use crate::vehicle::{PreparedPart, VehicleRigBuilder};

use super::context::{BodySpec, PhysicsWorld};
use super::math::to_isometry;

// ---------------------------------------------------------------------------
// ActorInstance / ResolvedScene
// ---------------------------------------------------------------------------

/// One instantiated actor, with its registered bodies keyed by bare
/// sub-part name.
#[derive(Debug)]
pub struct ActorInstance {
    /// Actor type the instance was built from.
    pub actor_type: String,
    /// Instance ordinal, unique per actor type, increasing in traversal order.
    pub ordinal: u32,
    /// The anchor node entity.
    pub anchor: Entity,
    /// Bare sub-part name → rigid body.
    pub bodies: HashMap<String, RigidBodyHandle>,
}

/// Outcome of one resolution pass over a scene document.
#[derive(Debug, Default)]
pub struct ResolvedScene {
    /// Actor instances in traversal order.
    pub actors: Vec<ActorInstance>,
    /// Fixed bodies created for untagged mesh nodes.
    pub static_bodies: Vec<RigidBodyHandle>,
    /// Nodes skipped after a recoverable fault (bad geometry, unknown type).
    pub skipped_nodes: usize,
}

impl ResolvedScene {
    /// Look up an actor instance by type and ordinal.
    #[must_use]
    pub fn actor(&self, actor_type: &str, ordinal: u32) -> Option<&ActorInstance> {
        self.actors
            .iter()
            .find(|actor| actor.actor_type == actor_type && actor.ordinal == ordinal)
    }
}

// ---------------------------------------------------------------------------
// resolve_scene
// ---------------------------------------------------------------------------

/// Walk the scene graph depth-first, spawning a render entity per node and
/// registering physics state for colliders and actors.
///
/// Static nodes with unusable geometry are skipped with a log line and the
/// traversal continues. An unknown actor type is logged as a warning and
/// skipped. A composite actor that fails constraint validation is rolled
/// back completely and the error is returned; none of its bodies or joints
/// reach the simulation.
///
/// # Errors
///
/// Returns [`StrutError::Actor`] when a composite instance is incomplete and
/// [`StrutError::Geometry`] when an actor sub-part carries unusable geometry.
pub fn resolve_scene(
    physics: &mut PhysicsWorld,
    world: &mut World,
    doc: &SceneDocument,
    registry: &PrefabRegistry,
) -> Result<ResolvedScene, StrutError> {
    let mut resolver = Resolver {
        physics,
        world,
        registry,
        ordinals: HashMap::new(),
        resolved: ResolvedScene::default(),
    };

    for root in &doc.roots {
        resolver.visit(root, None, Isometry3::identity())?;
    }

    Ok(resolver.resolved)
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

struct Resolver<'a> {
    physics: &'a mut PhysicsWorld,
    world: &'a mut World,
    registry: &'a PrefabRegistry,
    /// Next ordinal per actor type, in traversal order.
    ordinals: HashMap<String, u32>,
    resolved: ResolvedScene,
}

impl Resolver<'_> {
    fn visit(
        &mut self,
        node: &SceneNode,
        parent: Option<Entity>,
        parent_world: Isometry3<f32>,
    ) -> Result<(), StrutError> {
        let entity = match parent {
            Some(parent) => self
                .world
                .spawn((Name::new(node.name.clone()), node.transform, ChildOf(parent)))
                .id(),
            None => self
                .world
                .spawn((Name::new(node.name.clone()), node.transform))
                .id(),
        };
        let world_pose = parent_world * to_isometry(&node.transform);

        match NodeKind::of(node) {
            NodeKind::StaticCollider => {
                self.bind_static(node, entity, parent, parent_world, world_pose);
            }
            NodeKind::ActorAnchor => {
                self.bind_actor(node, entity, world_pose)?;
            }
            NodeKind::Decoration => {}
        }

        for child in &node.children {
            self.visit(child, Some(entity), world_pose)?;
        }
        Ok(())
    }

    /// Create a fixed body with exact mesh collision for an untagged node.
    /// Unusable geometry downgrades the node to decoration.
    fn bind_static(
        &mut self,
        node: &SceneNode,
        entity: Entity,
        parent: Option<Entity>,
        parent_world: Isometry3<f32>,
        world_pose: Isometry3<f32>,
    ) {
        let Some(mesh) = node.mesh.as_ref() else {
            return;
        };
        let shape = match static_shape(mesh) {
            Ok(shape) => shape,
            Err(err) => {
                debug!("skipping static node '{}': {err}", node.name);
                self.resolved.skipped_nodes += 1;
                return;
            }
        };

        let handle = self.physics.insert_body(BodySpec {
            shape,
            mass: 0.0,
            material: self.physics.default_material(),
            pose: world_pose,
        });
        self.physics
            .bind_node(handle, entity, parent.map(|_| parent_world.inverse()));
        self.world.entity_mut(entity).insert(PhysicsBody::Fixed);
        self.resolved.static_bodies.push(handle);
    }

    /// Instantiate the prefab for a tagged anchor and register its bodies.
    fn bind_actor(
        &mut self,
        node: &SceneNode,
        anchor: Entity,
        anchor_world: Isometry3<f32>,
    ) -> Result<(), StrutError> {
        // NodeKind::ActorAnchor guarantees the tag is present.
        let Some(actor_type) = node.actor_type() else {
            return Ok(());
        };
        let Some(prefab) = self.registry.resolve(actor_type) else {
            warn!(
                "unknown actor type '{actor_type}' on node '{}', skipping",
                node.name
            );
            self.resolved.skipped_nodes += 1;
            return Ok(());
        };

        let ordinal_slot = self.ordinals.entry(actor_type.to_owned()).or_insert(0);
        let ordinal = *ordinal_slot;
        *ordinal_slot += 1;

        let spawned = instantiate_prefab(self.world, anchor, &prefab, ordinal);
        let bodies = match self.register_parts(&spawned, &prefab, anchor_world) {
            Ok(bodies) => bodies,
            Err(err) => {
                // Roll back the instance entirely; the simulation never saw it.
                spawned.despawn_parts(self.world);
                return Err(err);
            }
        };

        for &(_, entity) in &spawned.parts {
            self.world.entity_mut(entity).insert(PhysicsBody::Dynamic);
        }
        self.resolved.actors.push(ActorInstance {
            actor_type: spawned.actor_type,
            ordinal,
            anchor,
            bodies,
        });
        Ok(())
    }

    /// Prepare and insert bodies for every sub-part of one instance.
    ///
    /// All specs are prepared before anything is inserted into the physics
    /// world, so validation failures leave zero bodies and joints behind.
    fn register_parts(
        &mut self,
        spawned: &SpawnedActor,
        prefab: &ActorPrefab,
        anchor_world: Isometry3<f32>,
    ) -> Result<HashMap<String, RigidBodyHandle>, StrutError> {
        let anchor_inverse = anchor_world.inverse();

        // Spawned parts mirror the template list one-to-one, in order.
        let mut prepared = Vec::with_capacity(prefab.parts.len());
        for (&(_, entity), template) in spawned.parts.iter().zip(&prefab.parts) {
            if prepared.iter().any(|(name, _)| *name == template.name) {
                return Err(ActorError::DuplicatePart(template.name.clone()).into());
            }
            let shape = cuboid_from_bounds(&template.mesh)?;
            prepared.push((
                template.name.clone(),
                PreparedPart {
                    entity,
                    spec: BodySpec {
                        shape,
                        mass: template.mass,
                        material: template
                            .material
                            .clone()
                            .unwrap_or_else(|| self.physics.default_material()),
                        pose: anchor_world * to_isometry(&template.local_transform),
                    },
                    hinge: template.hinge,
                },
            ));
        }

        if prefab.has_hinges() {
            let mut builder = VehicleRigBuilder::new(&spawned.actor_type, spawned.ordinal);
            for (name, part) in prepared {
                builder.add_part(&name, part)?;
            }
            let rig = builder.validate()?;
            Ok(rig.register(self.physics, anchor_inverse))
        } else {
            let mut bodies = HashMap::with_capacity(prepared.len());
            for (name, part) in prepared {
                let handle = self.physics.insert_body(part.spec);
                self.physics.bind_node(handle, part.entity, Some(anchor_inverse));
                bodies.insert(name, handle);
            }
            Ok(bodies)
        }
    }
}
