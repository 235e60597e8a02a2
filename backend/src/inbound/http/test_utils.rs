//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::ports::UserRepository;
use crate::domain::{SnippetService, User, UserId, UserService, Username};
use crate::inbound::http::HttpState;
use crate::outbound::persistence::{
    MemoryLoginService, MemorySnippetRepository, MemoryUserRepository,
};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Seed a state with the named accounts, each using the password `pw`.
///
/// Returns the state and the seeded users in argument order.
pub async fn seeded_state(names: &[&str]) -> (HttpState, Vec<User>) {
    let users = Arc::new(MemoryUserRepository::new());
    let snippets = Arc::new(MemorySnippetRepository::new());
    let login = Arc::new(MemoryLoginService::new());

    let mut seeded = Vec::with_capacity(names.len());
    for name in names {
        let Ok(username) = Username::new(*name) else {
            panic!("fixture username must validate: {name}");
        };
        let user = User::new(UserId::random(), username);
        assert!(users.upsert(&user).await.is_ok());
        assert!(login.register(user.clone(), "pw").is_ok());
        seeded.push(user);
    }

    let state = HttpState {
        snippets: SnippetService::new(snippets.clone(), users.clone()),
        users: UserService::new(users, snippets),
        login,
    };
    (state, seeded)
}
