use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::storage::kv_store::KeyValueStore;

/// Volatile key-value store. Contents vanish with the process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed a raw value, bypassing any encoding. Handy for simulating corrupt data.
    pub async fn with_item(self: Arc<Self>, key: &str, value: &str) -> Arc<Self> {
        self.inner.write().await.insert(key.to_string(), value.to_string());
        self
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, ServiceError> {
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), ServiceError> {
        self.inner.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<bool, ServiceError> {
        Ok(self.inner.write().await.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").await?, None);
        store.set_item("k", "v".into()).await?;
        assert_eq!(store.get_item("k").await?.as_deref(), Some("v"));
        assert!(store.remove_item("k").await?);
        assert!(!store.remove_item("k").await?);
        Ok(())
    }
}
