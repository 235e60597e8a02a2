//! HTTP adapter: handlers, wire bodies, and error mapping.

pub mod auth;
pub mod error;
pub mod health;
pub mod root;
pub mod schemas;
pub mod session;
pub mod snippets;
pub mod state;
pub mod users;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::ApiResult;
pub use state::HttpState;
