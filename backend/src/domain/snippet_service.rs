//! Snippet lifecycle use-cases.
//!
//! The service owns the resource lifecycle contract: payloads are validated
//! before any record is built, the owner is assigned from the execution
//! context in an explicit post-validation step, and the object-level
//! [`IsOwnerOrReadOnly`] gate runs only after the target record has been
//! located so a denial never masks a not-found outcome.

use std::sync::Arc;

use chrono::Utc;
use tracing::error;

use crate::domain::ports::{RepositoryError, SnippetRepository, UserRepository};
use crate::domain::{
    Error, IsOwnerOrReadOnly, RequestMethod, Snippet, SnippetDraft, SnippetId, SnippetPatch,
    UserId, Username, highlight,
};

/// A snippet joined with its owner's username for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetView {
    pub snippet: Snippet,
    pub owner: Username,
}

/// Use-case service for the snippet resource.
#[derive(Clone)]
pub struct SnippetService {
    snippets: Arc<dyn SnippetRepository>,
    users: Arc<dyn UserRepository>,
}

impl SnippetService {
    /// Create a service over the given adapters.
    pub fn new(snippets: Arc<dyn SnippetRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { snippets, users }
    }

    fn map_repo_error(err: &RepositoryError) -> Error {
        error!(error = %err, "snippet repository failure");
        Error::internal("snippet store unavailable")
    }

    async fn owner_name(&self, owner: &UserId) -> Result<Username, Error> {
        let user = self
            .users
            .find_by_id(owner)
            .await
            .map_err(|err| Self::map_repo_error(&err))?;
        // A stored snippet always references an existing user; a miss here
        // is a store inconsistency, not a client error.
        user.map(|u| u.username().clone())
            .ok_or_else(|| Error::internal("snippet owner missing from user store"))
    }

    async fn view(&self, snippet: Snippet) -> Result<SnippetView, Error> {
        let owner = self.owner_name(snippet.owner()).await?;
        Ok(SnippetView { snippet, owner })
    }

    async fn locate(&self, id: &SnippetId) -> Result<Snippet, Error> {
        self.snippets
            .find_by_id(id)
            .await
            .map_err(|err| Self::map_repo_error(&err))?
            .ok_or_else(|| Error::not_found("snippet not found"))
    }

    /// All snippets, ordered by creation time.
    pub async fn list(&self) -> Result<Vec<SnippetView>, Error> {
        let snippets = self
            .snippets
            .list()
            .await
            .map_err(|err| Self::map_repo_error(&err))?;
        let mut views = Vec::with_capacity(snippets.len());
        for snippet in snippets {
            views.push(self.view(snippet).await?);
        }
        Ok(views)
    }

    /// Create a snippet owned by `principal`.
    ///
    /// The owner comes exclusively from the authenticated principal; payload
    /// data cannot name one.
    pub async fn create(
        &self,
        draft: SnippetDraft,
        principal: &UserId,
    ) -> Result<SnippetView, Error> {
        let owner = self
            .users
            .find_by_id(principal)
            .await
            .map_err(|err| Self::map_repo_error(&err))?
            .ok_or_else(|| Error::unauthorized("session user no longer exists"))?;

        let snippet = Snippet::create(SnippetId::random(), draft, *owner.id(), Utc::now());
        self.snippets
            .save(&snippet)
            .await
            .map_err(|err| Self::map_repo_error(&err))?;
        Ok(SnippetView {
            snippet,
            owner: owner.username().clone(),
        })
    }

    /// Locate the target and run the object-level gate for a write method.
    ///
    /// Callers that parse a payload run this first, so a denied principal
    /// sees 403 (or 404 for a missing record) regardless of payload
    /// validity, mirroring the permission-before-validation ordering of the
    /// resource contract.
    pub async fn authorize_write(
        &self,
        id: &SnippetId,
        method: RequestMethod,
        principal: &UserId,
    ) -> Result<(), Error> {
        let snippet = self.locate(id).await?;
        IsOwnerOrReadOnly::enforce(method, snippet.owner(), Some(principal))
    }

    /// Fetch a snippet by identifier.
    pub async fn retrieve(&self, id: &SnippetId) -> Result<SnippetView, Error> {
        let snippet = self.locate(id).await?;
        self.view(snippet).await
    }

    /// Replace every payload field of an existing snippet.
    pub async fn update(
        &self,
        id: &SnippetId,
        draft: SnippetDraft,
        principal: &UserId,
    ) -> Result<SnippetView, Error> {
        self.mutate(id, RequestMethod::Put, principal, |snippet| {
            snippet.replace(draft);
        })
        .await
    }

    /// Merge a partial payload into an existing snippet.
    ///
    /// Shares permission semantics with [`SnippetService::update`].
    pub async fn patch(
        &self,
        id: &SnippetId,
        patch: SnippetPatch,
        principal: &UserId,
    ) -> Result<SnippetView, Error> {
        self.mutate(id, RequestMethod::Patch, principal, |snippet| {
            snippet.merge(patch);
        })
        .await
    }

    async fn mutate(
        &self,
        id: &SnippetId,
        method: RequestMethod,
        principal: &UserId,
        apply: impl FnOnce(&mut Snippet),
    ) -> Result<SnippetView, Error> {
        let mut snippet = self.locate(id).await?;
        IsOwnerOrReadOnly::enforce(method, snippet.owner(), Some(principal))?;
        apply(&mut snippet);
        self.snippets
            .save(&snippet)
            .await
            .map_err(|err| Self::map_repo_error(&err))?;
        self.view(snippet).await
    }

    /// Delete a snippet. Deleting an already-deleted id reports not-found.
    pub async fn destroy(&self, id: &SnippetId, principal: &UserId) -> Result<(), Error> {
        let snippet = self.locate(id).await?;
        IsOwnerOrReadOnly::enforce(RequestMethod::Delete, snippet.owner(), Some(principal))?;
        let removed = self
            .snippets
            .delete(id)
            .await
            .map_err(|err| Self::map_repo_error(&err))?;
        if removed {
            Ok(())
        } else {
            Err(Error::not_found("snippet not found"))
        }
    }

    /// Render the read-only highlighted view.
    pub async fn highlight(&self, id: &SnippetId) -> Result<String, Error> {
        let snippet = self.locate(id).await?;
        Ok(highlight::render(&snippet))
    }
}
