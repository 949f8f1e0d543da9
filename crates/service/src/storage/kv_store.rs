use crate::errors::ServiceError;
use async_trait::async_trait;

/// Host-provided persistent string slots, the way a browser exposes local storage.
/// Implementations can be file-backed or in-memory.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, ServiceError>;
    async fn set_item(&self, key: &str, value: String) -> Result<(), ServiceError>;
    /// Returns whether the key existed.
    async fn remove_item(&self, key: &str) -> Result<bool, ServiceError>;
}
