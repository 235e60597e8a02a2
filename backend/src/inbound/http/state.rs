//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain use-cases and ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::LoginService;
use crate::domain::{SnippetService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub snippets: SnippetService,
    pub users: UserService,
    pub login: Arc<dyn LoginService>,
}
