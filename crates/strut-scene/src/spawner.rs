//! Prefab instantiation into the live ECS scene.
//!
//! Clones a prefab's sub-part templates as child entities of an anchor,
//! assigning each a stable namespaced name so multiple instances of the same
//! actor type never collide in flat name lookups.

use bevy::ecs::hierarchy::ChildOf;
use bevy::prelude::*;

use crate::prefab::ActorPrefab;

// ---------------------------------------------------------------------------
// SpawnedActor
// ---------------------------------------------------------------------------

/// Result of instantiating a prefab — the part entities keyed by their bare
/// sub-part names, in prefab order.
#[derive(Debug, Clone)]
pub struct SpawnedActor {
    /// Actor type this instance was built from.
    pub actor_type: String,
    /// Instance ordinal, unique per actor type, increasing in traversal order.
    pub ordinal: u32,
    /// The anchor node entity the parts are parented under.
    pub anchor: Entity,
    /// `(bare part name, entity)` pairs in prefab order.
    pub parts: Vec<(String, Entity)>,
}

impl SpawnedActor {
    /// Look up a part entity by its bare sub-part name.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<Entity> {
        self.parts
            .iter()
            .find(|(part_name, _)| part_name == name)
            .map(|&(_, entity)| entity)
    }

    /// Number of spawned part entities.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Despawn every spawned part entity. Used to roll back an instance
    /// whose constraint wiring failed before it touched the simulation.
    pub fn despawn_parts(&self, world: &mut World) {
        for &(_, entity) in &self.parts {
            world.entity_mut(entity).despawn();
        }
    }
}

// ---------------------------------------------------------------------------
// part_label
// ---------------------------------------------------------------------------

/// The namespaced render name for one sub-part of one actor instance,
/// e.g. `car[2].w_fl`.
#[must_use]
pub fn part_label(actor_type: &str, ordinal: u32, part: &str) -> String {
    format!("{actor_type}[{ordinal}].{part}")
}

// ---------------------------------------------------------------------------
// instantiate_prefab
// ---------------------------------------------------------------------------

/// Clone a prefab's sub-parts into the scene as children of `anchor`.
///
/// Each part entity receives a [`Name`] built by [`part_label`] and the
/// template's local transform. No physics state is created here; the
/// resolver binds bodies afterwards.
pub fn instantiate_prefab(
    world: &mut World,
    anchor: Entity,
    prefab: &ActorPrefab,
    ordinal: u32,
) -> SpawnedActor {
    let mut parts = Vec::with_capacity(prefab.parts.len());

    for template in &prefab.parts {
        let entity = world
            .spawn((
                Name::new(part_label(&prefab.actor_type, ordinal, &template.name)),
                template.local_transform,
                ChildOf(anchor),
            ))
            .id();
        parts.push((template.name.clone(), entity));
    }

    SpawnedActor {
        actor_type: prefab.actor_type.clone(),
        ordinal,
        anchor,
        parts,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefab::PartTemplate;
    use crate::types::MeshData;

    fn cube_prefab() -> ActorPrefab {
        ActorPrefab::new("cube").with_part(
            PartTemplate::new("cube", MeshData::default(), 1.0)
                .at(Transform::from_xyz(0.0, 0.5, 0.0)),
        )
    }

    #[test]
    fn labels_are_namespaced_by_ordinal() {
        assert_eq!(part_label("car", 0, "w_fl"), "car[0].w_fl");
        assert_eq!(part_label("car", 2, "body"), "car[2].body");
    }

    #[test]
    fn spawns_parts_under_anchor() {
        let mut world = World::new();
        let anchor = world.spawn(Transform::IDENTITY).id();

        let spawned = instantiate_prefab(&mut world, anchor, &cube_prefab(), 0);
        assert_eq!(spawned.part_count(), 1);

        let entity = spawned.part("cube").unwrap();
        assert_eq!(world.get::<ChildOf>(entity).unwrap().parent(), anchor);
        assert_eq!(
            world.get::<Name>(entity).unwrap().as_str(),
            "cube[0].cube"
        );

        let transform = world.get::<Transform>(entity).unwrap();
        assert!((transform.translation.y - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn ordinals_keep_instances_distinct() {
        let mut world = World::new();
        let prefab = cube_prefab();
        let anchor_a = world.spawn(Transform::IDENTITY).id();
        let anchor_b = world.spawn(Transform::IDENTITY).id();

        let first = instantiate_prefab(&mut world, anchor_a, &prefab, 0);
        let second = instantiate_prefab(&mut world, anchor_b, &prefab, 1);

        let name_a = world.get::<Name>(first.part("cube").unwrap()).unwrap();
        let name_b = world.get::<Name>(second.part("cube").unwrap()).unwrap();
        assert_eq!(name_a.as_str(), "cube[0].cube");
        assert_eq!(name_b.as_str(), "cube[1].cube");
    }

    #[test]
    fn despawn_parts_rolls_back_the_instance() {
        let mut world = World::new();
        let anchor = world.spawn(Transform::IDENTITY).id();
        let spawned = instantiate_prefab(&mut world, anchor, &cube_prefab(), 0);
        let entity = spawned.part("cube").unwrap();

        spawned.despawn_parts(&mut world);
        assert!(world.get_entity(entity).is_err());
        // The anchor itself survives.
        assert!(world.get_entity(anchor).is_ok());
    }
}
