//! User login use case.

use std::sync::Arc;

use chrono::Duration;
use tracing::debug;

use domain::{
    AccessToken, AuthError, AuthResult, Email, HashedPassword, TokenService, User, UserRepository,
};

use crate::hashing::HashingPool;

/// Fixed argon2 hash verified against when no user matches the email, so the
/// unknown-email path costs the same one argon2 verification as the real-user
/// path. It never verifies successfully.
pub(crate) const PLACEHOLDER_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123454$dummyhash1234567890123456789010";

/// Input for user login.
#[derive(Debug)]
pub struct LoginUserInput {
    pub email: String,
    pub password: String,
}

/// Verifies credentials and issues a time-bounded token.
///
/// Unknown email and wrong password are indistinguishable to the caller:
/// both paths perform exactly one hash verification and both return the
/// single `InvalidCredentials` variant from the same branch.
pub struct LoginUser {
    repo: Arc<dyn UserRepository>,
    hashing: HashingPool,
    tokens: Arc<dyn TokenService>,
    token_ttl: Duration,
}

impl LoginUser {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        hashing: HashingPool,
        tokens: Arc<dyn TokenService>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            repo,
            hashing,
            tokens,
            token_ttl,
        }
    }

    /// The configured token time-to-live.
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Execute the login.
    ///
    /// # Errors
    /// - [`AuthError::InvalidCredentials`] for unknown email or wrong password
    /// - [`AuthError::UserInactive`] when credentials are valid but the
    ///   account is deactivated
    /// - [`AuthError::HashingFailure`] / [`AuthError::RepositoryFailure`] on
    ///   infrastructure failures
    pub async fn execute(&self, input: LoginUserInput) -> AuthResult<(AccessToken, User)> {
        // A malformed email trivially matches no account; it takes the same
        // placeholder-verification path as an unknown one.
        let candidate = match Email::parse(&input.email) {
            Ok(email) => self.repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let stored_hash = candidate
            .as_ref()
            .map(|user| user.hashed_password().clone())
            .unwrap_or_else(|| HashedPassword::from_hash(PLACEHOLDER_HASH.to_string()));

        let password_valid = self.hashing.verify(input.password, stored_hash).await?;

        let user = match candidate {
            Some(user) if password_valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        // The caller has proven knowledge of valid credentials, so the
        // inactive state is acceptable to disclose.
        if !user.is_active() {
            return Err(AuthError::UserInactive);
        }

        let token = self.tokens.issue(user.id(), self.token_ttl)?;

        debug!(user_id = %user.id(), "login succeeded");
        Ok((token, user))
    }
}
