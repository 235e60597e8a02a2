//! Port abstraction for user persistence adapters.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::RepositoryError;

/// Read-mostly persistence operations for user records.
///
/// Users are created by an external identity collaborator; `upsert` exists
/// so adapters can be seeded at startup and in tests.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by username.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Insert or replace a user record.
    async fn upsert(&self, user: &User) -> Result<(), RepositoryError>;
}
