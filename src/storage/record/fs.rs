//! Filesystem-backed record store: one JSON file per record under `<root>/<collection>/`.

use crate::crypto::new_record_id;
use crate::storage::record::store::{
    is_storable_id, Record, RecordStore, StoreError, StoreResult, RECORD_ID_FIELD,
};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

const RECORD_EXT: &str = "json";

pub struct FsRecordStore {
    collection: String,
    dir: PathBuf,
}

impl FsRecordStore {
    /// Scopes a store to `collection` inside `root`. Nothing is touched on disk until the
    /// first write.
    pub fn new(root: impl AsRef<Path>, collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            dir: root.as_ref().join(collection),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, RECORD_EXT))
    }

    /// Writes to a hidden temp sibling, then renames over the record file.
    /// The temp name is unique per write so concurrent writers never share it.
    async fn write_record(&self, id: &str, record: &Record) -> StoreResult<()> {
        self.ensure_dir().await?;
        let bytes = serde_json::to_vec(record).map_err(StoreError::Serialize)?;
        let tmp = self.dir.join(format!(".{}.{}.tmp", id, new_record_id()));
        if let Err(e) = fs::write(&tmp, &bytes).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&tmp, self.record_path(id)).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn read_record(&self, path: &Path) -> StoreResult<Option<Record>> {
        let bytes = match fs::read(path).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice::<Record>(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                path: path.display().to_string(),
                source,
            })
    }
}

fn is_record_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or(true, |n| n.starts_with('.'));
    !hidden && path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXT)
}

#[async_trait]
impl RecordStore for FsRecordStore {
    fn collection(&self) -> &str {
        &self.collection
    }

    async fn create(&self, mut fields: Record) -> StoreResult<Record> {
        let id = new_record_id();
        fields.insert(RECORD_ID_FIELD.to_string(), JsonValue::String(id.clone()));
        self.write_record(&id, &fields).await?;
        tracing::debug!(collection = %self.collection, id = %id, "record created");
        Ok(fields)
    }

    async fn list(&self) -> StoreResult<Vec<Record>> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(rd) => rd,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !is_record_file(&path) {
                continue;
            }
            // Deleted between enumeration and read.
            if let Some(record) = self.read_record(&path).await? {
                records.push(record);
            }
        }
        tracing::debug!(collection = %self.collection, count = records.len(), "records listed");
        Ok(records)
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Record> {
        if !is_storable_id(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.read_record(&self.record_path(id))
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update_by_id(&self, id: &str, mut fields: Record) -> StoreResult<Record> {
        if !is_storable_id(id) || self.read_record(&self.record_path(id)).await?.is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        fields.insert(RECORD_ID_FIELD.to_string(), JsonValue::String(id.to_string()));
        self.write_record(id, &fields).await?;
        tracing::debug!(collection = %self.collection, id = %id, "record updated");
        Ok(fields)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<u64> {
        if !is_storable_id(id) {
            return Ok(0);
        }
        match fs::remove_file(self.record_path(id)).await {
            Ok(()) => {
                tracing::debug!(collection = %self.collection, id = %id, "record deleted");
                Ok(1)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}
