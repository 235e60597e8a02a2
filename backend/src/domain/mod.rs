//! Domain types, validation, access policy, and use-case services.
//!
//! Everything here is transport agnostic: HTTP concerns live in the inbound
//! adapter, persistence concerns behind the [`ports`] traits. Types document
//! their invariants in their own Rustdoc.

pub mod error;
pub mod highlight;
pub mod policy;
pub mod ports;
pub mod snippet;
pub mod snippet_service;
mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::policy::{IsOwnerOrReadOnly, RequestMethod};
pub use self::snippet::{
    InvalidSnippetId, Language, Snippet, SnippetDraft, SnippetId, SnippetPatch,
    SnippetValidationError, Style, TITLE_MAX,
};
pub use self::snippet_service::{SnippetService, SnippetView};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USERNAME_MAX, User, UserId, UserValidationError, Username};
pub use self::user_service::{UserService, UserView};

#[cfg(test)]
mod snippet_service_tests;
