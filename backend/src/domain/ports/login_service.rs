//! Driving port for login use-cases.
//!
//! In hexagonal terms this is a *driving* port: the HTTP adapter calls it to
//! authenticate credentials without knowing the backing infrastructure, so
//! handler tests can substitute a deterministic implementation.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Validation errors for login credentials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Shape-validated username/password pair.
///
/// Only emptiness is checked here; whether the pair actually authenticates
/// is the [`LoginService`] adapter's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Validate and construct credentials from raw request parts.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, CredentialsError> {
        if username.trim().is_empty() {
            return Err(CredentialsError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(CredentialsError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Account name being claimed.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Secret to verify.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    ///
    /// Failures surface as [`Error::unauthorized`] without distinguishing
    /// unknown accounts from wrong passwords.
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, Error>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for credential shape validation.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ada", "secret", None)]
    #[case("  ", "secret", Some(CredentialsError::EmptyUsername))]
    #[case("ada", "", Some(CredentialsError::EmptyPassword))]
    fn credential_shape_validation(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: Option<CredentialsError>,
    ) {
        assert_eq!(
            Credentials::try_from_parts(username, password).err(),
            expected
        );
    }
}
