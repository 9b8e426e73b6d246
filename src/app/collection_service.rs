//! The collection service.
//!
//! Owns the injected storage root and one record store per registered collection.
//! Request handlers look stores up here; nothing else in the process knows where
//! records live on disk.

use crate::domain::model::{CollectionModel, CollectionRegistry};
use crate::storage::record::{FsRecordStore, RecordStore, StoreResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct CollectionService {
    root: PathBuf,
    registry: CollectionRegistry,
    stores: HashMap<String, Arc<FsRecordStore>>,
}

impl CollectionService {
    /// Builds one filesystem store per registered collection under `root`.
    pub fn new(root: impl Into<PathBuf>, registry: CollectionRegistry) -> Self {
        let root = root.into();
        let stores = registry
            .list_collections()
            .into_iter()
            .map(|name| {
                let store = Arc::new(FsRecordStore::new(&root, &name));
                (name, store)
            })
            .collect();
        Self {
            root,
            registry,
            stores,
        }
    }

    pub fn storage_root(&self) -> &Path {
        &self.root
    }

    pub fn registry(&self) -> &CollectionRegistry {
        &self.registry
    }

    pub fn collections(&self) -> Vec<String> {
        self.registry.list_collections()
    }

    pub fn model(&self, collection: &str) -> Option<Arc<dyn CollectionModel>> {
        self.registry.get(collection)
    }

    /// Store for `collection`, or None if the collection is not registered.
    pub fn store(&self, collection: &str) -> Option<Arc<dyn RecordStore>> {
        self.stores
            .get(collection)
            .map(|s| s.clone() as Arc<dyn RecordStore>)
    }

    /// Creates the root and every collection directory. Stores tolerate missing
    /// directories, so this only moves permission problems to startup.
    pub async fn ensure_directories(&self) -> StoreResult<()> {
        for (name, store) in &self.stores {
            store.ensure_dir().await?;
            tracing::debug!(collection = %name, dir = %store.dir().display(), "collection directory ready");
        }
        Ok(())
    }

    /// Cheap liveness probe for the storage root.
    pub async fn check_storage(&self) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        let meta = tokio::fs::metadata(&self.root).await?;
        if meta.permissions().readonly() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("storage root {} is read-only", self.root.display()),
            )
            .into());
        }
        Ok(())
    }
}
