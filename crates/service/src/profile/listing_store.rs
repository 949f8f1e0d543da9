use crate::errors::ServiceError;
use async_trait::async_trait;

use models::{UserService, UserServiceInput};

/// Trait abstraction over the user-authored listing collection.
/// Every consumer goes through this instead of touching persistence directly.
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn list(&self) -> Vec<UserService>;
    async fn get(&self, id: &str) -> Option<UserService>;
    async fn create(&self, input: UserServiceInput) -> Result<UserService, ServiceError>;
    async fn update(&self, id: &str, input: UserServiceInput) -> Result<UserService, ServiceError>;
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}
