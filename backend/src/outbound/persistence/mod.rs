//! Persistence adapters.
//!
//! The external store is modelled behind the repository ports; this module
//! provides process-local implementations backed by `RwLock<HashMap>`.
//! Single-record operations are atomic under the lock; concurrent writers
//! follow last-writer-wins, matching the service's documented semantics.

mod memory_login_service;
mod memory_snippet_repository;
mod memory_user_repository;

pub use memory_login_service::MemoryLoginService;
pub use memory_snippet_repository::MemorySnippetRepository;
pub use memory_user_repository::MemoryUserRepository;
