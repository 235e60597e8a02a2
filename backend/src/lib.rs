//! Snipbin library modules.
//!
//! Hexagonal layout: `domain` holds the models, services, and ports;
//! `inbound` adapts HTTP onto them; `outbound` provides the persistence
//! adapters; `middleware` carries cross-cutting request concerns.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-scoped trace identifier.
pub use domain::TraceId;
/// Tracing middleware for the HTTP server.
pub use middleware::trace::Trace;
