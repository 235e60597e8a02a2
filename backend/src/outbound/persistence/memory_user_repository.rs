//! In-memory user repository adapter.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{RepositoryError, UserRepository};
use crate::domain::{User, UserId};

/// Process-local user store, seeded at startup.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    inner: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| RepositoryError::unavailable("user store lock poisoned"))?;
        let mut users: Vec<User> = guard.values().cloned().collect();
        users.sort_by(|a, b| a.username().as_ref().cmp(b.username().as_ref()));
        Ok(users)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| RepositoryError::unavailable("user store lock poisoned"))?;
        Ok(guard.get(id.as_uuid()).cloned())
    }

    async fn upsert(&self, user: &User) -> Result<(), RepositoryError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| RepositoryError::unavailable("user store lock poisoned"))?;
        guard.insert(*user.id().as_uuid(), user.clone());
        Ok(())
    }
}
