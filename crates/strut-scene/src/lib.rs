// strut-scene: In-memory scene graph, actor prefabs, and the asset barrier.
//
// This crate is the boundary to the external asset loader: the loader
// produces `SceneDocument` and `ActorPrefab` values (however it decodes
// them), and everything downstream consumes those. Nothing here touches the
// physics engine.

pub mod loader;
pub mod prefab;
pub mod spawner;
pub mod types;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        loader::{AssetBarrier, LoadedAssets},
        prefab::{ActorPrefab, HingeSpec, PartTemplate, PrefabRegistry},
        spawner::{SpawnedActor, instantiate_prefab, part_label},
        types::{ACTOR_TYPE_KEY, MeshData, Metadata, NodeKind, SceneDocument, SceneNode},
    };
}
