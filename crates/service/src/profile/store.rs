use std::sync::Arc;
use chrono::{SecondsFormat, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use models::{UserService, UserServiceInput};

use crate::errors::ServiceError;
use crate::profile::listing_store::ListingStore;
use crate::storage::{JsonMapStore, KeyValueStore};

/// Owns the persisted collection of user-authored listings.
///
/// Every mutation reads the whole collection, changes it, and writes it back
/// under a single key. The internal mutex serializes those cycles within one
/// process; separate processes sharing the same slot are not coordinated.
pub struct ProfileStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
    /// Highest id issued by this store; guards the read-modify-write cycle too.
    last_issued: Mutex<i64>,
}

impl ProfileStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Arc<Self> {
        Arc::new(Self { kv, key: key.into(), last_issued: Mutex::new(0) })
    }

    /// Open a file-backed store at `path`, keeping the collection under `key`.
    pub async fn open<P: Into<std::path::PathBuf>>(path: P, key: &str) -> Result<Arc<Self>, ServiceError> {
        let kv = JsonMapStore::<String>::new(path).await?;
        debug!(path = %kv.path().display(), %key, "opened profile store");
        Ok(Self::new(kv, key))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Absent, unreadable or malformed data all load as an empty collection.
    async fn load(&self) -> Vec<UserService> {
        let raw = match self.kv.get_item(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "cannot read stored services; treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<UserService>>(&raw) {
            Ok(services) => services,
            Err(e) => {
                warn!(key = %self.key, error = %e, "malformed stored services; treating as empty");
                Vec::new()
            }
        }
    }

    async fn persist(&self, services: &[UserService]) -> Result<(), ServiceError> {
        let raw = serde_json::to_string(services).map_err(|e| ServiceError::Storage(e.to_string()))?;
        self.kv.set_item(&self.key, raw).await?;
        debug!(key = %self.key, count = services.len(), "persisted services");
        Ok(())
    }

    /// All user listings in storage order.
    pub async fn list(&self) -> Vec<UserService> {
        self.load().await
    }

    pub async fn get(&self, id: &str) -> Option<UserService> {
        self.load().await.into_iter().find(|s| s.id == id)
    }

    /// Append a new listing with a fresh time-based id and the current time as `createdAt`.
    pub async fn create(&self, input: UserServiceInput) -> Result<UserService, ServiceError> {
        input.validate()?;
        let mut last = self.last_issued.lock().await;
        let mut services = self.load().await;

        let now = Utc::now();
        let id = next_id(now.timestamp_millis(), *last, &services)?;
        let rec = UserService::from_input(
            id.to_string(),
            now.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            input,
        );
        services.push(rec.clone());
        self.persist(&services).await?;
        *last = id;

        info!(event = "service_created", id = %rec.id, category = %rec.category, "service listing created");
        Ok(rec)
    }

    /// Replace every field but `id` and `createdAt`. Unknown ids are an error.
    pub async fn update(&self, id: &str, input: UserServiceInput) -> Result<UserService, ServiceError> {
        input.validate()?;
        let _guard = self.last_issued.lock().await;
        let mut services = self.load().await;

        let existing = services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ServiceError::not_found("service", id))?;
        existing.apply(input);
        let updated = existing.clone();
        self.persist(&services).await?;

        info!(event = "service_updated", id = %updated.id, "service listing updated");
        Ok(updated)
    }

    /// Remove a listing; returns whether it existed. Absent ids are a no-op.
    pub async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let _guard = self.last_issued.lock().await;
        let mut services = self.load().await;
        let before = services.len();
        services.retain(|s| s.id != id);
        if services.len() == before {
            debug!(%id, "delete of unknown service ignored");
            return Ok(false);
        }
        self.persist(&services).await?;
        info!(event = "service_deleted", %id, "service listing deleted");
        Ok(true)
    }
}

/// Millisecond clock, bumped past anything already issued or stored so ids
/// stay unique and increasing even when the clock stalls or steps back.
/// Fails instead of wrapping when a stored id leaves no room above it.
fn next_id(now_ms: i64, last_issued: i64, existing: &[UserService]) -> Result<i64, ServiceError> {
    let max_stored = existing
        .iter()
        .filter_map(|s| s.id.parse::<i64>().ok())
        .max()
        .unwrap_or(0);
    let floor = last_issued.max(max_stored);
    floor
        .checked_add(1)
        .map(|above| now_ms.max(above))
        .ok_or_else(|| ServiceError::Storage(format!("no id available above stored id {floor}")))
}

#[async_trait::async_trait]
impl ListingStore for ProfileStore {
    async fn list(&self) -> Vec<UserService> { self.list().await }
    async fn get(&self, id: &str) -> Option<UserService> { self.get(id).await }
    async fn create(&self, input: UserServiceInput) -> Result<UserService, ServiceError> { self.create(input).await }
    async fn update(&self, id: &str, input: UserServiceInput) -> Result<UserService, ServiceError> { self.update(id, input).await }
    async fn delete(&self, id: &str) -> Result<bool, ServiceError> { self.delete(id).await }
}
