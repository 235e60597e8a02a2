//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::env;
use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use snipbin::Trace;
#[cfg(debug_assertions)]
use snipbin::doc::ApiDoc;
use snipbin::domain::ports::UserRepository;
use snipbin::domain::{SnippetService, User, UserId, UserService, Username};
use snipbin::inbound::http::auth::{login as login_route, logout};
use snipbin::inbound::http::error::json_config;
use snipbin::inbound::http::health::{HealthState, live, ready};
use snipbin::inbound::http::root::api_root;
use snipbin::inbound::http::snippets::{
    create_snippet, delete_snippet, highlight_snippet, list_snippets, patch_snippet,
    retrieve_snippet, update_snippet,
};
use snipbin::inbound::http::state::HttpState;
use snipbin::inbound::http::users::{list_users, retrieve_user};
use snipbin::outbound::persistence::{
    MemoryLoginService, MemorySnippetRepository, MemoryUserRepository,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Seed the in-memory stores with demo accounts.
///
/// Account management belongs to an external identity collaborator; until one
/// is wired in, two well-known accounts make the API explorable. The shared
/// password comes from `SNIPBIN_DEMO_PASSWORD` and defaults to `password`.
async fn build_http_state() -> std::io::Result<HttpState> {
    let users = Arc::new(MemoryUserRepository::new());
    let snippets = Arc::new(MemorySnippetRepository::new());
    let login = Arc::new(MemoryLoginService::new());

    let password = env::var("SNIPBIN_DEMO_PASSWORD").unwrap_or_else(|_| "password".into());
    for name in ["ada", "grace"] {
        let username = Username::new(name)
            .map_err(|e| std::io::Error::other(format!("invalid demo username {name}: {e}")))?;
        let user = User::new(UserId::random(), username);
        users
            .upsert(&user)
            .await
            .map_err(|e| std::io::Error::other(format!("failed to seed user {name}: {e}")))?;
        login
            .register(user, &password)
            .map_err(|e| std::io::Error::other(format!("failed to seed account {name}: {e}")))?;
        info!(username = name, "seeded demo account");
    }

    Ok(HttpState {
        snippets: SnippetService::new(snippets.clone(), users.clone()),
        users: UserService::new(users, snippets),
        login,
    })
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(session)
        .wrap(Trace)
        .service(api_root)
        .service(login_route)
        .service(logout)
        .service(list_snippets)
        .service(create_snippet)
        .service(retrieve_snippet)
        .service(update_snippet)
        .service(patch_snippet)
        .service(delete_snippet)
        .service(highlight_snippet)
        .service(list_users)
        .service(retrieve_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding state or binding the socket fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state().await?);
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
