//! JSON file collections
//!
//! Each entity type persists as a single JSON array file under the data
//! directory. The whole file is rewritten on every mutation; a per-collection
//! RwLock serializes access within the process.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::utils::errors::{KilaHubError, Result};
use crate::utils::logging::log_storage_operation;

/// A persistent collection backed by one JSON array file
#[derive(Debug)]
pub struct JsonCollection<T> {
    path: PathBuf,
    name: String,
    items: RwLock<Vec<T>>,
}

impl<T> JsonCollection<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync,
{
    /// Open a collection, loading existing items or starting empty
    pub async fn open(data_dir: &Path, name: &str) -> Result<Self> {
        fs::create_dir_all(data_dir).await?;
        let path = data_dir.join(format!("{}.json", name));

        let items = if path.exists() {
            let content = fs::read_to_string(&path).await?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    KilaHubError::Storage(format!(
                        "Corrupt collection file {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
        } else {
            Vec::new()
        };

        info!(collection = name, count = items.len(), "Collection loaded");

        Ok(Self {
            path,
            name: name.to_string(),
            items: RwLock::new(items),
        })
    }

    /// Run a closure over a snapshot of the items
    pub async fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let items = self.items.read().await;
        f(&items)
    }

    /// Return a full clone of the collection
    pub async fn all(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    /// Number of items in the collection
    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }

    /// Mutate the items and rewrite the whole file
    pub async fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> Result<R> {
        let started = Instant::now();
        let mut items = self.items.write().await;
        let result = f(&mut items);

        let json = serde_json::to_string_pretty(&*items)?;
        let outcome = fs::write(&self.path, json).await;
        log_storage_operation(
            "rewrite",
            &self.name,
            started.elapsed().as_millis() as u64,
            outcome.is_ok(),
        );
        outcome?;

        debug!(collection = %self.name, count = items.len(), "Collection persisted");
        Ok(result)
    }
}
