//! Read-only user use-cases.
//!
//! Users are managed by an external identity collaborator; this service only
//! lists and retrieves them, joining each with the ids of the snippets they
//! own (the reverse side of the ownership relation).

use std::sync::Arc;

use tracing::error;

use crate::domain::ports::{RepositoryError, SnippetRepository, UserRepository};
use crate::domain::{Error, SnippetId, User, UserId};

/// A user joined with the ids of their owned snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub user: User,
    pub snippet_ids: Vec<SnippetId>,
}

/// Use-case service for the read-only user resource.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    snippets: Arc<dyn SnippetRepository>,
}

impl UserService {
    /// Create a service over the given adapters.
    pub fn new(users: Arc<dyn UserRepository>, snippets: Arc<dyn SnippetRepository>) -> Self {
        Self { users, snippets }
    }

    fn map_repo_error(err: &RepositoryError) -> Error {
        error!(error = %err, "user repository failure");
        Error::internal("user store unavailable")
    }

    async fn owned_snippet_ids(&self, owner: &UserId) -> Result<Vec<SnippetId>, Error> {
        let snippets = self
            .snippets
            .list_by_owner(owner)
            .await
            .map_err(|err| Self::map_repo_error(&err))?;
        Ok(snippets.iter().map(|s| *s.id()).collect())
    }

    /// All users, ordered by username.
    pub async fn list(&self) -> Result<Vec<UserView>, Error> {
        let users = self
            .users
            .list()
            .await
            .map_err(|err| Self::map_repo_error(&err))?;
        let mut views = Vec::with_capacity(users.len());
        for user in users {
            let snippet_ids = self.owned_snippet_ids(user.id()).await?;
            views.push(UserView { user, snippet_ids });
        }
        Ok(views)
    }

    /// Fetch a user by identifier.
    pub async fn retrieve(&self, id: &UserId) -> Result<UserView, Error> {
        let user = self
            .users
            .find_by_id(id)
            .await
            .map_err(|err| Self::map_repo_error(&err))?
            .ok_or_else(|| Error::not_found("user not found"))?;
        let snippet_ids = self.owned_snippet_ids(user.id()).await?;
        Ok(UserView { user, snippet_ids })
    }
}
