//! In-memory snippet repository adapter.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{RepositoryError, SnippetRepository};
use crate::domain::{Snippet, SnippetId, UserId};

/// Process-local snippet store.
#[derive(Debug, Default)]
pub struct MemorySnippetRepository {
    inner: RwLock<HashMap<Uuid, Snippet>>,
}

impl MemorySnippetRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut snippets: Vec<Snippet>) -> Vec<Snippet> {
        // Creation time is the ordering key; tie-break on id so the order
        // stays deterministic when timestamps collide.
        snippets.sort_by(|a, b| {
            a.created()
                .cmp(&b.created())
                .then_with(|| a.id().as_uuid().cmp(b.id().as_uuid()))
        });
        snippets
    }
}

#[async_trait]
impl SnippetRepository for MemorySnippetRepository {
    async fn list(&self) -> Result<Vec<Snippet>, RepositoryError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| RepositoryError::unavailable("snippet store lock poisoned"))?;
        Ok(Self::sorted(guard.values().cloned().collect()))
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Snippet>, RepositoryError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| RepositoryError::unavailable("snippet store lock poisoned"))?;
        Ok(Self::sorted(
            guard
                .values()
                .filter(|s| s.owner() == owner)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_id(&self, id: &SnippetId) -> Result<Option<Snippet>, RepositoryError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| RepositoryError::unavailable("snippet store lock poisoned"))?;
        Ok(guard.get(id.as_uuid()).cloned())
    }

    async fn save(&self, snippet: &Snippet) -> Result<(), RepositoryError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| RepositoryError::unavailable("snippet store lock poisoned"))?;
        guard.insert(*snippet.id().as_uuid(), snippet.clone());
        Ok(())
    }

    async fn delete(&self, id: &SnippetId) -> Result<bool, RepositoryError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| RepositoryError::unavailable("snippet store lock poisoned"))?;
        Ok(guard.remove(id.as_uuid()).is_some())
    }
}
