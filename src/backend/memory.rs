use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserStore;
use crate::error::{AppError, AppResult};
use crate::models::RegisteredUser;

/// Process-local user list
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<RegisteredUser>>,
    max_users: usize,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store refusing new users once `max_users` are held (0 = unlimited)
    pub fn with_capacity_limit(max_users: usize) -> Self {
        InMemoryUserStore {
            users: RwLock::new(Vec::new()),
            max_users,
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn add_user(&self, user: RegisteredUser) -> AppResult<RegisteredUser> {
        let mut users = self.users.write().await;
        if self.max_users > 0 && users.len() >= self.max_users {
            return Err(AppError::StoreFull(self.max_users));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<RegisteredUser>> {
        Ok(self.users.read().await.clone())
    }
}
