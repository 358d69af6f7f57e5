//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters hand validated [`LoginCredentials`] to this port without
//! knowing the backing infrastructure, so handler tests can substitute a
//! double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// Email accepted by [`FixtureLoginService`].
pub const FIXTURE_LOGIN_EMAIL: &str = "admin@example.com";
/// Password accepted by [`FixtureLoginService`].
pub const FIXTURE_LOGIN_PASSWORD: &str = "password";
const FIXTURE_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

/// In-memory authenticator used until a user store is wired.
///
/// [`FIXTURE_LOGIN_EMAIL`] / [`FIXTURE_LOGIN_PASSWORD`] authenticate
/// successfully and produce a fixed user id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        if credentials.email() == FIXTURE_LOGIN_EMAIL
            && credentials.password() == FIXTURE_LOGIN_PASSWORD
        {
            UserId::new(FIXTURE_USER_ID)
                .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
