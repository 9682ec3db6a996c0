//! Composite-actor constraint wiring.
//!
//! A vehicle is a chassis plus four named wheels joined by hinges. The rig
//! builder accumulates prepared sub-parts and validates the full set exactly
//! once; only a fully-formed [`VehicleRig`] can register bodies and joints,
//! so a half-wired vehicle never reaches the simulation.

use std::collections::HashMap;

use bevy::prelude::Entity;
use nalgebra::Isometry3;
use rapier3d::prelude::RigidBodyHandle;

use strut_core::error::ActorError;
use strut_scene::prefab::HingeSpec;

use crate::rapier::context::{BodySpec, PhysicsWorld};

/// Required chassis part name.
pub const BODY_PART: &str = "body";

/// Required wheel part names, front-left through rear-right.
pub const WHEEL_PARTS: [&str; 4] = ["w_fl", "w_fr", "w_rl", "w_rr"];

// ---------------------------------------------------------------------------
// PreparedPart
// ---------------------------------------------------------------------------

/// A sub-part staged for registration: everything needed to create its body,
/// but not yet inserted into the world.
#[derive(Debug)]
pub struct PreparedPart {
    /// Render entity the body will be bound to.
    pub entity: Entity,
    /// Body creation parameters (shape, mass, material, world pose).
    pub spec: BodySpec,
    /// Hinge wiring to the chassis, required on wheels.
    pub hinge: Option<HingeSpec>,
}

// ---------------------------------------------------------------------------
// VehicleRigBuilder
// ---------------------------------------------------------------------------

/// Accumulates named sub-parts for one vehicle instance.
#[derive(Debug)]
pub struct VehicleRigBuilder {
    actor_type: String,
    ordinal: u32,
    parts: HashMap<String, PreparedPart>,
}

impl VehicleRigBuilder {
    /// Start a rig for one instance of `actor_type`.
    #[must_use]
    pub fn new(actor_type: &str, ordinal: u32) -> Self {
        Self {
            actor_type: actor_type.to_owned(),
            ordinal,
            parts: HashMap::new(),
        }
    }

    /// Stage one named sub-part.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::DuplicatePart`] if the name was already staged.
    pub fn add_part(&mut self, name: &str, part: PreparedPart) -> Result<(), ActorError> {
        if self.parts.contains_key(name) {
            return Err(ActorError::DuplicatePart(name.to_owned()));
        }
        self.parts.insert(name.to_owned(), part);
        Ok(())
    }

    /// Validate the staged parts into a complete rig.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::IncompleteActor`] if the chassis or any wheel is
    /// missing, or [`ActorError::MissingHinge`] if a wheel template carries
    /// no hinge spec.
    pub fn validate(mut self) -> Result<VehicleRig, ActorError> {
        let chassis = self
            .parts
            .remove(BODY_PART)
            .ok_or_else(|| self.incomplete(BODY_PART))?;

        let mut wheels = Vec::with_capacity(WHEEL_PARTS.len());
        for wheel_name in WHEEL_PARTS {
            let part = self
                .parts
                .remove(wheel_name)
                .ok_or_else(|| self.incomplete(wheel_name))?;
            let hinge = part.hinge.ok_or_else(|| ActorError::MissingHinge {
                actor_type: self.actor_type.clone(),
                ordinal: self.ordinal,
                part: wheel_name.to_owned(),
            })?;
            wheels.push((wheel_name.to_owned(), part, hinge));
        }

        // Anything left over is an unconstrained extra part (decoration
        // geometry riding along with the vehicle).
        let extras = self.parts.into_iter().collect();

        Ok(VehicleRig {
            chassis,
            wheels,
            extras,
        })
    }

    fn incomplete(&self, missing: &'static str) -> ActorError {
        ActorError::IncompleteActor {
            actor_type: self.actor_type.clone(),
            ordinal: self.ordinal,
            missing,
        }
    }
}

// ---------------------------------------------------------------------------
// VehicleRig
// ---------------------------------------------------------------------------

/// A validated vehicle: chassis, four hinged wheels, and any extra parts.
///
/// Construction goes through [`VehicleRigBuilder::validate`]; a partially
/// populated rig cannot exist.
#[derive(Debug)]
pub struct VehicleRig {
    chassis: PreparedPart,
    wheels: Vec<(String, PreparedPart, HingeSpec)>,
    extras: Vec<(String, PreparedPart)>,
}

impl VehicleRig {
    /// Insert every body, bind each to its render entity, and wire one hinge
    /// per wheel between chassis and wheel. Returns the sub-part → body map.
    pub fn register(
        self,
        physics: &mut PhysicsWorld,
        anchor_inverse: Isometry3<f32>,
    ) -> HashMap<String, RigidBodyHandle> {
        let mut bodies = HashMap::new();

        let chassis_handle = physics.insert_body(self.chassis.spec);
        physics.bind_node(chassis_handle, self.chassis.entity, Some(anchor_inverse));
        bodies.insert(BODY_PART.to_owned(), chassis_handle);

        for (name, wheel, hinge) in self.wheels {
            let wheel_handle = physics.insert_body(wheel.spec);
            physics.bind_node(wheel_handle, wheel.entity, Some(anchor_inverse));
            physics.insert_hinge(chassis_handle, wheel_handle, &hinge);
            bodies.insert(name, wheel_handle);
        }

        for (name, extra) in self.extras {
            let handle = physics.insert_body(extra.spec);
            physics.bind_node(handle, extra.entity, Some(anchor_inverse));
            bodies.insert(name, handle);
        }

        bodies
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;
    use bevy::prelude::World;
    use nalgebra::Isometry3;
    use rapier3d::prelude::SharedShape;

    use strut_core::config::WorldConfig;
    use strut_core::material::PhysicsMaterial;

    fn prepared(world: &mut World, hinge: Option<HingeSpec>) -> PreparedPart {
        PreparedPart {
            entity: world.spawn_empty().id(),
            spec: BodySpec {
                shape: SharedShape::cuboid(0.5, 0.5, 0.5),
                mass: 1.0,
                material: PhysicsMaterial::ground(0.0),
                pose: Isometry3::identity(),
            },
            hinge,
        }
    }

    fn full_builder(world: &mut World) -> VehicleRigBuilder {
        let mut builder = VehicleRigBuilder::new("car", 0);
        builder.add_part(BODY_PART, prepared(world, None)).unwrap();
        for wheel in WHEEL_PARTS {
            builder
                .add_part(wheel, prepared(world, Some(HingeSpec::rolling_x(Vec3::ZERO))))
                .unwrap();
        }
        builder
    }

    #[test]
    fn complete_rig_validates() {
        let mut world = World::new();
        let rig = full_builder(&mut world).validate().unwrap();
        assert_eq!(rig.wheels.len(), 4);
    }

    #[test]
    fn missing_wheel_is_incomplete() {
        let mut world = World::new();
        let mut builder = VehicleRigBuilder::new("car", 3);
        builder.add_part(BODY_PART, prepared(&mut world, None)).unwrap();
        for wheel in &WHEEL_PARTS[..3] {
            builder
                .add_part(
                    wheel,
                    prepared(&mut world, Some(HingeSpec::rolling_x(Vec3::ZERO))),
                )
                .unwrap();
        }

        let err = builder.validate().unwrap_err();
        assert_eq!(
            err,
            ActorError::IncompleteActor {
                actor_type: "car".into(),
                ordinal: 3,
                missing: "w_rr",
            }
        );
    }

    #[test]
    fn missing_chassis_is_incomplete() {
        let mut world = World::new();
        let mut builder = VehicleRigBuilder::new("car", 0);
        for wheel in WHEEL_PARTS {
            builder
                .add_part(
                    wheel,
                    prepared(&mut world, Some(HingeSpec::rolling_x(Vec3::ZERO))),
                )
                .unwrap();
        }

        let err = builder.validate().unwrap_err();
        assert!(matches!(
            err,
            ActorError::IncompleteActor { missing: "body", .. }
        ));
    }

    #[test]
    fn wheel_without_hinge_is_rejected() {
        let mut world = World::new();
        let mut builder = VehicleRigBuilder::new("car", 0);
        builder.add_part(BODY_PART, prepared(&mut world, None)).unwrap();
        for wheel in WHEEL_PARTS {
            builder.add_part(wheel, prepared(&mut world, None)).unwrap();
        }

        let err = builder.validate().unwrap_err();
        assert!(matches!(err, ActorError::MissingHinge { .. }));
    }

    #[test]
    fn duplicate_part_is_rejected() {
        let mut world = World::new();
        let mut builder = VehicleRigBuilder::new("car", 0);
        builder.add_part(BODY_PART, prepared(&mut world, None)).unwrap();
        let err = builder
            .add_part(BODY_PART, prepared(&mut world, None))
            .unwrap_err();
        assert_eq!(err, ActorError::DuplicatePart("body".into()));
    }

    #[test]
    fn register_wires_one_hinge_per_wheel() {
        let mut world = World::new();
        let mut physics = PhysicsWorld::new(&WorldConfig::default());

        let rig = full_builder(&mut world).validate().unwrap();
        let bodies = rig.register(&mut physics, Isometry3::identity());

        assert_eq!(bodies.len(), 5);
        assert_eq!(physics.body_count(), 5);
        assert_eq!(physics.joint_count(), 4);
        assert_eq!(physics.binding_count(), 5);
    }
}
