use std::{collections::BTreeMap, path::PathBuf, sync::Arc};
use async_trait::async_trait;
use tokio::{fs, sync::RwLock};
use tracing::{debug, warn};

use crate::errors::ServiceError;
use crate::storage::kv_store::KeyValueStore;

/// JSON file-backed map keyed by string.
///
/// The whole map lives in one file and is rewritten on every mutation
/// (write to a sibling temp file, then rename over the original).
#[derive(Clone)]
pub struct JsonMapStore<V> {
    inner: Arc<RwLock<BTreeMap<String, V>>>,
    file_path: PathBuf,
}

impl<V> JsonMapStore<V>
where
    V: serde::Serialize + serde::de::DeserializeOwned + Clone + Send + Sync,
{
    /// Open the store at `path`. A missing file starts empty and is created;
    /// an unreadable or malformed file is logged and treated as empty.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ServiceError::Storage(format!("cannot create {}: {e}", parent.display())))?;
            }
        }

        let map = match fs::read(&file_path).await {
            Ok(bytes) => match serde_json::from_slice::<BTreeMap<String, V>>(&bytes) {
                Ok(map) => {
                    debug!(path = %file_path.display(), entries = map.len(), "loaded json map store");
                    map
                }
                Err(e) => {
                    warn!(path = %file_path.display(), error = %e, "malformed store file; starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let store = Self { inner: Arc::new(RwLock::new(BTreeMap::new())), file_path };
                store.save().await?;
                return Ok(Arc::new(store));
            }
            Err(e) => {
                warn!(path = %file_path.display(), error = %e, "store file unreadable; starting empty");
                BTreeMap::new()
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.file_path
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        self.write_file(&map).await
    }

    async fn write_file(&self, map: &BTreeMap<String, V>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        let tmp = self.file_path.with_extension("json.tmp");
        fs::write(&tmp, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::rename(&tmp, &self.file_path).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    /// List all entries as `(key, value)` pairs in key order.
    pub async fn list(&self) -> Vec<(String, V)> {
        let map = self.inner.read().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or replace a value and persist. The map only changes once the file is written.
    pub async fn insert(&self, key: String, value: V) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        let mut next = map.clone();
        next.insert(key, value);
        self.write_file(&next).await?;
        *map = next;
        Ok(())
    }

    /// Remove a key and persist; returns whether it existed.
    pub async fn remove(&self, key: &str) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        if !map.contains_key(key) {
            return Ok(false);
        }
        let mut next = map.clone();
        next.remove(key);
        self.write_file(&next).await?;
        *map = next;
        Ok(true)
    }
}

#[async_trait]
impl KeyValueStore for JsonMapStore<String> {
    async fn get_item(&self, key: &str) -> Result<Option<String>, ServiceError> {
        Ok(self.get(key).await)
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), ServiceError> {
        self.insert(key.to_string(), value).await
    }

    async fn remove_item(&self, key: &str) -> Result<bool, ServiceError> {
        self.remove(key).await
    }
}
