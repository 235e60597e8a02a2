//! Domain ports for the hexagonal boundary.
//!
//! Inbound adapters drive the domain through the services; the services in
//! turn depend only on these traits, so persistence and authentication
//! back-ends can be swapped without touching domain code.

mod login_service;
mod snippet_repository;
mod user_repository;

pub use login_service::{Credentials, CredentialsError, LoginService};
pub use snippet_repository::SnippetRepository;
pub use user_repository::UserRepository;

/// Errors raised by repository adapters.
///
/// Kept deliberately coarse: the store is an external collaborator, and the
/// services map every failure to an internal error after logging it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store could not be reached or its lock was poisoned.
    #[error("repository unavailable: {message}")]
    Unavailable { message: String },
}

impl RepositoryError {
    /// Construct an [`RepositoryError::Unavailable`] from any message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
