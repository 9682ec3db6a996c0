//! The asset load barrier.
//!
//! Scene and prefab assets load concurrently with each other, but actor
//! resolution must never start on a partial scene. [`AssetBarrier`] is an
//! explicit join-all over the independent load futures: the only way to get
//! a [`LoadedAssets`] is for every queued load to complete, and any failure
//! aborts the whole batch.

use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};

use strut_core::error::LoadError;

use crate::prefab::{ActorPrefab, PrefabRegistry};
use crate::types::SceneDocument;

/// A boxed, in-flight asset load.
pub type AssetLoad<T> = BoxFuture<'static, Result<T, LoadError>>;

// ---------------------------------------------------------------------------
// LoadedAssets
// ---------------------------------------------------------------------------

/// Everything the resolution pass needs, available only after the barrier.
#[derive(Debug)]
pub struct LoadedAssets {
    /// The fully loaded scene document.
    pub scene: SceneDocument,
    /// Registry populated with every loaded prefab.
    pub registry: PrefabRegistry,
}

// ---------------------------------------------------------------------------
// AssetBarrier
// ---------------------------------------------------------------------------

/// Collects pending load futures and joins them all before releasing any
/// asset data.
#[derive(Default)]
pub struct AssetBarrier {
    scene: Option<AssetLoad<SceneDocument>>,
    prefabs: Vec<AssetLoad<ActorPrefab>>,
}

impl AssetBarrier {
    /// Create an empty barrier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the scene document load.
    #[must_use]
    pub fn with_scene<F>(mut self, load: F) -> Self
    where
        F: Future<Output = Result<SceneDocument, LoadError>> + Send + 'static,
    {
        self.scene = Some(load.boxed());
        self
    }

    /// Queue one prefab load.
    #[must_use]
    pub fn with_prefab<F>(mut self, load: F) -> Self
    where
        F: Future<Output = Result<ActorPrefab, LoadError>> + Send + 'static,
    {
        self.prefabs.push(load.boxed());
        self
    }

    /// Await every queued load and assemble the prefab registry.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] of any failed load, or
    /// [`LoadError::MissingScene`] if no scene was queued. On error no asset
    /// data escapes.
    pub async fn join(self) -> Result<LoadedAssets, LoadError> {
        let scene_load = self.scene.ok_or(LoadError::MissingScene)?;
        let (scene, prefabs) = futures::try_join!(scene_load, try_join_all(self.prefabs))?;

        let mut registry = PrefabRegistry::new();
        for prefab in prefabs {
            registry.register(prefab);
        }

        Ok(LoadedAssets { scene, registry })
    }

    /// Blocking convenience wrapper around [`join`](Self::join) for drivers
    /// without their own executor.
    ///
    /// # Errors
    ///
    /// Same as [`join`](Self::join).
    pub fn block_on(self) -> Result<LoadedAssets, LoadError> {
        futures::executor::block_on(self.join())
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

    fn ready_scene() -> AssetLoad<SceneDocument> {
        async { Ok(SceneDocument::new("level")) }.boxed()
    }

    fn ready_prefab(actor_type: &str) -> AssetLoad<ActorPrefab> {
        let prefab = ActorPrefab::new(actor_type)
            .with_part(PartTemplate::new("root", MeshData::default(), 1.0));
        async move { Ok(prefab) }.boxed()
    }

    #[test]
    fn joins_scene_and_prefabs() {
        let assets = AssetBarrier::new()
            .with_scene(ready_scene())
            .with_prefab(ready_prefab("cube"))
            .with_prefab(ready_prefab("car"))
            .block_on()
            .unwrap();

        assert_eq!(assets.scene.name, "level");
        assert_eq!(assets.registry.len(), 2);
        assert!(assets.registry.resolve("cube").is_some());
        assert!(assets.registry.resolve("car").is_some());
    }

    #[test]
    fn missing_scene_is_an_error() {
        let err = AssetBarrier::new()
            .with_prefab(ready_prefab("cube"))
            .block_on()
            .unwrap_err();
        assert_eq!(err, LoadError::MissingScene);
    }

    #[test]
    fn any_failed_load_aborts_the_batch() {
        let err = AssetBarrier::new()
            .with_scene(ready_scene())
            .with_prefab(ready_prefab("cube"))
            .with_prefab(
                async {
                    Err(LoadError::Failed {
                        asset: "car.gltf".into(),
                        reason: "decode error".into(),
                    })
                }
                .boxed(),
            )
            .block_on()
            .unwrap_err();

        assert!(matches!(err, LoadError::Failed { .. }));
    }
}
