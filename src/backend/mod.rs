use crate::config::StorageConfig;
use crate::error::AppResult;
use crate::models::RegisteredUser;
use async_trait::async_trait;
use std::sync::Arc;

pub mod memory;

pub use memory::InMemoryUserStore;

/// Storage for accepted registrations
///
/// Only registrations that already passed validation reach the store; it
/// performs no checks of its own beyond capacity.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Append a registered user and return it as stored
    async fn add_user(&self, user: RegisteredUser) -> AppResult<RegisteredUser>;

    /// All registered users in insertion order
    async fn list_users(&self) -> AppResult<Vec<RegisteredUser>>;
}

/// Factory for creating store instances
pub struct StoreFactory;

impl StoreFactory {
    pub fn create(config: &StorageConfig) -> Arc<dyn UserStore> {
        Arc::new(InMemoryUserStore::with_capacity_limit(config.max_users))
    }
}
