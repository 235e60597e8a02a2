//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for the
//! REST API. It registers every HTTP endpoint from the inbound layer, the
//! adapter-side schema wrappers for domain types, and the session cookie
//! security scheme. The generated specification backs the Swagger UI served
//! in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login/.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Snipbin API",
        description = "Code snippet sharing over HTTP with session login and \
                       owner-or-read-only access control."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::root::api_root,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::snippets::list_snippets,
        crate::inbound::http::snippets::create_snippet,
        crate::inbound::http::snippets::retrieve_snippet,
        crate::inbound::http::snippets::update_snippet,
        crate::inbound::http::snippets::patch_snippet,
        crate::inbound::http::snippets::delete_snippet,
        crate::inbound::http::snippets::highlight_snippet,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::retrieve_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "root", description = "API discovery"),
        (name = "auth", description = "Session login and logout"),
        (name = "snippets", description = "Code snippet resource"),
        (name = "users", description = "Read-only user resource"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
