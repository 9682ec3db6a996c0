//! Canned scene documents built from the fixture meshes.

use bevy::math::Vec3;
use bevy::transform::components::Transform;

use strut_scene::types::{SceneDocument, SceneNode};

use crate::meshes::ground_mesh;

/// A scene with a single static ground quad at the origin.
#[must_use]
pub fn ground_scene() -> SceneDocument {
    SceneDocument::new("ground").with_root(ground_node())
}

/// Ground plus one cube actor anchor two meters up.
#[must_use]
pub fn demo_scene() -> SceneDocument {
    SceneDocument::new("demo").with_root(ground_node()).with_root(
        SceneNode::new("cube_spawn")
            .with_transform(Transform::from_xyz(0.0, 2.0, 0.0))
            .with_actor_type("cube"),
    )
}

/// Ground plus two car anchors side by side.
#[must_use]
pub fn two_car_scene() -> SceneDocument {
    SceneDocument::new("two_cars")
        .with_root(ground_node())
        .with_root(car_anchor("car_spawn_a", Vec3::new(-4.0, 1.0, 0.0)))
        .with_root(car_anchor("car_spawn_b", Vec3::new(4.0, 1.0, 0.0)))
}

fn ground_node() -> SceneNode {
    SceneNode::new("ground").with_mesh(ground_mesh(50.0, 50.0))
}

fn car_anchor(name: &str, position: Vec3) -> SceneNode {
    SceneNode::new(name)
        .with_transform(Transform::from_translation(position))
        .with_actor_type("car")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use strut_scene::types::NodeKind;

    #[test]
    fn demo_scene_mixes_kinds() {
        let doc = demo_scene();
        assert_eq!(doc.roots.len(), 2);
        assert_eq!(NodeKind::of(&doc.roots[0]), NodeKind::StaticCollider);
        assert_eq!(NodeKind::of(&doc.roots[1]), NodeKind::ActorAnchor);
    }

    #[test]
    fn two_car_scene_has_two_anchors() {
        let doc = two_car_scene();
        let anchors = doc
            .roots
            .iter()
            .filter(|node| NodeKind::of(node) == NodeKind::ActorAnchor)
            .count();
        assert_eq!(anchors, 2);
    }
}
