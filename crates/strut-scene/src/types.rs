//! Core data types for the in-memory scene graph.
//!
//! These types are the crate's canonical representation of a loaded scene,
//! independent of whatever format the external loader decodes. Nodes are
//! read-only to the simulation core; only the sync loop writes transforms,
//! and it does so through the ECS mirror, never through these values.

use std::collections::HashMap;

use bevy::math::Vec3;
use bevy::transform::components::Transform;

/// Metadata key whose value tags a node as an actor anchor.
pub const ACTOR_TYPE_KEY: &str = "actor_type";

// ---------------------------------------------------------------------------
// MeshData
// ---------------------------------------------------------------------------

/// Raw mesh buffers attached to a scene node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Flat position buffer, `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Optional triangle index buffer, three indices per face.
    pub indices: Option<Vec<u32>>,
    /// Max corner of the axis-aligned bounding box, if the loader computed
    /// one. Meshes are authored with origin-centered bounds, so this is also
    /// the half-extent vector.
    pub bounding_box_max: Option<Vec3>,
}

impl MeshData {
    /// Number of vertices described by the position buffer.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles described by the index buffer, zero if unindexed.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.as_ref().map_or(0, |indices| indices.len() / 3)
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Free-form per-node metadata map written by the scene author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: HashMap<String, String>,
}

impl Metadata {
    /// Empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a metadata entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a metadata entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The actor-type tag, if present.
    #[must_use]
    pub fn actor_type(&self) -> Option<&str> {
        self.get(ACTOR_TYPE_KEY)
    }
}

// ---------------------------------------------------------------------------
// SceneNode
// ---------------------------------------------------------------------------

/// One node of the loaded scene graph.
#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    /// Node name as authored.
    pub name: String,
    /// Transform relative to the parent node.
    pub transform: Transform,
    /// Mesh geometry, if the node carries any.
    pub mesh: Option<MeshData>,
    /// Authored metadata.
    pub metadata: Metadata,
    /// Child nodes.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create an empty node with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the local transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Attach mesh geometry.
    #[must_use]
    pub fn with_mesh(mut self, mesh: MeshData) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Tag the node with an actor type.
    #[must_use]
    pub fn with_actor_type(mut self, actor_type: impl Into<String>) -> Self {
        self.metadata.insert(ACTOR_TYPE_KEY, actor_type);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// The actor-type tag, if present.
    #[must_use]
    pub fn actor_type(&self) -> Option<&str> {
        self.metadata.actor_type()
    }
}

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

/// Role a node plays in the simulation, computed once during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Untagged geometry: exact static collision, never integrated.
    StaticCollider,
    /// Tagged node that triggers prefab instantiation underneath it.
    ActorAnchor,
    /// Render-only node; no physics representation.
    Decoration,
}

impl NodeKind {
    /// Classify a node. Actor tags take priority over geometry; untagged
    /// nodes without a mesh are decoration.
    #[must_use]
    pub fn of(node: &SceneNode) -> Self {
        if node.actor_type().is_some() {
            Self::ActorAnchor
        } else if node.mesh.is_some() {
            Self::StaticCollider
        } else {
            Self::Decoration
        }
    }
}

// ---------------------------------------------------------------------------
// SceneDocument
// ---------------------------------------------------------------------------

/// A fully loaded scene: a forest of root nodes.
#[derive(Debug, Clone, Default)]
pub struct SceneDocument {
    /// Document name, usually the source asset name.
    pub name: String,
    /// Root nodes in authored order.
    pub roots: Vec<SceneNode>,
}

impl SceneDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roots: Vec::new(),
        }
    }

    /// Append a root node.
    #[must_use]
    pub fn with_root(mut self, node: SceneNode) -> Self {
        self.roots.push(node);
        self
    }

    /// Total node count, including all descendants.
    #[must_use]
    pub fn node_count(&self) -> usize {
        fn count(node: &SceneNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed_mesh() -> MeshData {
        MeshData {
            positions: vec![0.0; 9],
            indices: Some(vec![0, 1, 2]),
            bounding_box_max: None,
        }
    }

    #[test]
    fn mesh_counts() {
        let mesh = indexed_mesh();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);

        let unindexed = MeshData {
            positions: vec![0.0; 9],
            ..MeshData::default()
        };
        assert_eq!(unindexed.triangle_count(), 0);
    }

    #[test]
    fn actor_tag_roundtrip() {
        let node = SceneNode::new("spawn_point").with_actor_type("car");
        assert_eq!(node.actor_type(), Some("car"));
        assert_eq!(node.metadata.get(ACTOR_TYPE_KEY), Some("car"));
    }

    #[test]
    fn classification_priority() {
        // A tag wins even when the node also carries a mesh.
        let tagged_mesh = SceneNode::new("a")
            .with_mesh(indexed_mesh())
            .with_actor_type("cube");
        assert_eq!(NodeKind::of(&tagged_mesh), NodeKind::ActorAnchor);

        let plain_mesh = SceneNode::new("b").with_mesh(indexed_mesh());
        assert_eq!(NodeKind::of(&plain_mesh), NodeKind::StaticCollider);

        let empty = SceneNode::new("c");
        assert_eq!(NodeKind::of(&empty), NodeKind::Decoration);
    }

    #[test]
    fn document_counts_nested_nodes() {
        let doc = SceneDocument::new("level")
            .with_root(SceneNode::new("a").with_child(SceneNode::new("b")))
            .with_root(SceneNode::new("c"));
        assert_eq!(doc.node_count(), 3);
    }
}
