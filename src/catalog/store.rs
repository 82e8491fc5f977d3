//! Item Store Module
//!
//! Persists the full item collection as one JSON file. Every read loads the
//! whole file and every write rewrites it; there is no in-memory mirror kept
//! across calls, so callers always see their own committed writes.
//!
//! Known limitations, accepted by design: a failure mid-rewrite leaves the
//! file in an undefined state, and two concurrent appends can lose one of
//! the writes (last full rewrite wins).

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::fs;
use tracing::debug;

use crate::catalog::{DraftItem, Item};
use crate::error::{ApiError, Result};

// == Item Store ==
/// File-backed store for the item collection.
#[derive(Debug, Clone)]
pub struct ItemStore {
    /// Location of the persisted collection
    data_path: PathBuf,
}

impl ItemStore {
    // == Constructor ==
    /// Creates a store over the collection file at `data_path`.
    ///
    /// The file is not touched here; it is read and rewritten per operation.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Returns the path of the persisted collection.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    // == Load All ==
    /// Reads and deserializes the full persisted collection.
    ///
    /// Fails with `CorruptData` if the bytes are not a valid item array;
    /// the collection is never partially parsed.
    pub async fn load_all(&self) -> Result<Vec<Item>> {
        let raw = fs::read(&self.data_path).await?;
        serde_json::from_slice(&raw).map_err(ApiError::CorruptData)
    }

    // == Save All ==
    /// Rewrites the whole persisted collection.
    ///
    /// Pretty-printed to keep the file hand-inspectable.
    pub async fn save_all(&self, items: &[Item]) -> Result<()> {
        let raw = serde_json::to_vec_pretty(items).map_err(std::io::Error::from)?;
        fs::write(&self.data_path, raw).await?;
        Ok(())
    }

    // == Get ==
    /// Retrieves a single item by exact id match.
    ///
    /// Linear scan over the loaded collection.
    pub async fn get(&self, id: i64) -> Result<Item> {
        let items = self.load_all().await?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| ApiError::NotFound("Item not found".to_string()))
    }

    // == Append ==
    /// Assigns an id to the draft, appends it, and rewrites the collection.
    ///
    /// The id is the current Unix time in milliseconds: unique under
    /// single-writer operation, not under concurrent or same-millisecond
    /// creations. Preserved as observed behavior rather than swapped for a
    /// counter scheme.
    pub async fn append(&self, draft: DraftItem) -> Result<Item> {
        let mut items = self.load_all().await?;
        let item = draft.into_item(current_timestamp_ms());
        items.push(item.clone());
        self.save_all(&items).await?;

        debug!(id = item.id, "item appended to collection");
        Ok(item)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as i64
}
