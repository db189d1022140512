//! Authentication facade consumed by transport adapters.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use domain::{
    AccessToken, AuthResult, PasswordHasher, TokenService, UserRepository, UserView,
};

use crate::config::AuthConfig;
use crate::hashing::HashingPool;
use crate::use_cases::{
    LoginUser, LoginUserInput, RegisterUser, RegisterUserInput, ValidateToken,
};

/// Result of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutput {
    /// Signed access token
    #[serde(serialize_with = "serialize_token")]
    pub token: AccessToken,
    /// Token lifetime in seconds
    pub expires_in: i64,
    /// Minimal view of the authenticated user
    pub user: UserView,
}

fn serialize_token<S: serde::Serializer>(
    token: &AccessToken,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(token.as_str())
}

/// The three operations the core exposes, consumed identically by every
/// transport adapter.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user.
    async fn register(&self, input: RegisterUserInput) -> AuthResult<UserView>;

    /// Verify credentials and issue a token.
    async fn login(&self, input: LoginUserInput) -> AuthResult<LoginOutput>;

    /// Validate a token against current account state.
    async fn validate(&self, token: &str) -> AuthResult<UserView>;
}

/// Concrete [`AuthService`] wiring the three use cases over injected ports.
///
/// Stateless and reentrant: every call is an independent unit of work, so one
/// instance serves arbitrarily many concurrent invocations.
pub struct Authenticator {
    register: RegisterUser,
    login: LoginUser,
    validate: ValidateToken,
}

impl Authenticator {
    /// Wire the use cases over the given port implementations.
    ///
    /// One bounded hashing pool is shared by registration and login so the
    /// configured concurrency cap holds across both.
    pub fn new(
        repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
        config: &AuthConfig,
    ) -> Self {
        let hashing = HashingPool::new(hasher, config.max_concurrent_hashes);
        Self {
            register: RegisterUser::new(Arc::clone(&repo), hashing.clone()),
            login: LoginUser::new(
                Arc::clone(&repo),
                hashing,
                Arc::clone(&tokens),
                config.token_ttl(),
            ),
            validate: ValidateToken::new(repo, tokens),
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, input: RegisterUserInput) -> AuthResult<UserView> {
        let user = self.register.execute(input).await?;
        Ok(UserView::from(user))
    }

    async fn login(&self, input: LoginUserInput) -> AuthResult<LoginOutput> {
        let expires_in = self.login.token_ttl().num_seconds();
        let (token, user) = self.login.execute(input).await?;
        Ok(LoginOutput {
            token,
            expires_in,
            user: UserView::from(user),
        })
    }

    async fn validate(&self, token: &str) -> AuthResult<UserView> {
        let user = self.validate.execute(token).await?;
        Ok(UserView::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn login_output_serializes_the_token_as_a_plain_string() {
        let output = LoginOutput {
            token: AccessToken::new("signed.jwt.token".to_string()),
            expires_in: 3600,
            user: UserView {
                id: Uuid::new_v4(),
                email: "a@b.com".to_string(),
                display_name: None,
                created_at: Utc::now(),
            },
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["token"], "signed.jwt.token");
        assert_eq!(json["expires_in"], 3600);
        assert_eq!(json["user"]["email"], "a@b.com");
        // display_name is None and skipped entirely.
        assert!(json["user"].get("display_name").is_none());
    }
}
