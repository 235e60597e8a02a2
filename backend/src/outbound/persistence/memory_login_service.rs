//! In-memory login adapter verifying SHA-256 password digests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::domain::ports::{Credentials, LoginService};
use crate::domain::{Error, User};

fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

struct Account {
    user: User,
    password_digest: String,
}

/// Process-local account registry for session login.
///
/// Accounts are seeded at startup alongside the user store; the identity
/// collaborator that would manage them in production is out of scope.
#[derive(Default)]
pub struct MemoryLoginService {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryLoginService {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account with the given clear-text password.
    ///
    /// Only the SHA-256 digest is retained.
    pub fn register(&self, user: User, password: &str) -> Result<(), Error> {
        let mut guard = self
            .accounts
            .write()
            .map_err(|_| Error::internal("account registry lock poisoned"))?;
        guard.insert(
            user.username().to_string(),
            Account {
                user,
                password_digest: digest(password),
            },
        );
        Ok(())
    }
}

#[async_trait]
impl LoginService for MemoryLoginService {
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, Error> {
        let guard = self
            .accounts
            .read()
            .map_err(|_| Error::internal("account registry lock poisoned"))?;
        // One failure message for both unknown accounts and wrong passwords
        // so login probes cannot enumerate usernames.
        guard
            .get(credentials.username())
            .filter(|account| account.password_digest == digest(credentials.password()))
            .map(|account| account.user.clone())
            .ok_or_else(|| Error::unauthorized("invalid credentials"))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the login adapter.
    use rstest::rstest;

    use super::*;
    use crate::domain::{ErrorCode, UserId, Username};

    fn service_with_ada() -> (MemoryLoginService, User) {
        let username = match Username::new("ada") {
            Ok(username) => username,
            Err(err) => panic!("fixture username must validate: {err}"),
        };
        let ada = User::new(UserId::random(), username);
        let service = MemoryLoginService::new();
        assert!(service.register(ada.clone(), "correct-horse").is_ok());
        (service, ada)
    }

    #[rstest]
    #[case("ada", "correct-horse", true)]
    #[case("ada", "wrong", false)]
    #[case("grace", "correct-horse", false)]
    #[tokio::test]
    async fn authenticates_only_matching_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let (service, ada) = service_with_ada();
        let creds = match Credentials::try_from_parts(username, password) {
            Ok(creds) => creds,
            Err(err) => panic!("fixture credentials must validate: {err}"),
        };
        match (should_succeed, service.authenticate(&creds).await) {
            (true, Ok(user)) => assert_eq!(user, ada),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (expected, outcome) => {
                panic!("expected success={expected}, got {outcome:?}")
            }
        }
    }
}
