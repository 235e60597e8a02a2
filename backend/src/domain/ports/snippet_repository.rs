//! Port abstraction for snippet persistence adapters.

use async_trait::async_trait;

use crate::domain::{Snippet, SnippetId, UserId};

use super::RepositoryError;

/// Persistence operations for snippet records.
///
/// Single-record operations are assumed atomic; there is no multi-record
/// transaction surface. Concurrent writers follow last-writer-wins.
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// All snippets ordered by creation time.
    async fn list(&self) -> Result<Vec<Snippet>, RepositoryError>;

    /// Snippets owned by `owner`, ordered by creation time.
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Snippet>, RepositoryError>;

    /// Fetch a snippet by identifier.
    async fn find_by_id(&self, id: &SnippetId) -> Result<Option<Snippet>, RepositoryError>;

    /// Store a snippet record, replacing any record with the same id.
    async fn save(&self, snippet: &Snippet) -> Result<(), RepositoryError>;

    /// Delete by identifier; returns `false` when no record existed.
    async fn delete(&self, id: &SnippetId) -> Result<bool, RepositoryError>;
}
