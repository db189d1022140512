//! Token validation use case.

use std::sync::Arc;

use domain::{AuthError, AuthResult, TokenService, User, UserRepository};

/// Validates a token and resolves its subject to the current account state.
///
/// The user re-fetch happens on every call: tokens are not individually
/// revocable, so observing `is_active` here is what makes deactivation
/// revoke still-unexpired tokens.
pub struct ValidateToken {
    repo: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenService>,
}

impl ValidateToken {
    pub fn new(repo: Arc<dyn UserRepository>, tokens: Arc<dyn TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Execute the validation.
    ///
    /// # Errors
    /// - [`AuthError::TokenExpired`] / [`AuthError::TokenInvalid`] from the
    ///   token service, propagated verbatim
    /// - [`AuthError::UserNotFound`] when the subject no longer resolves
    /// - [`AuthError::UserInactive`] when the account has been deactivated
    /// - [`AuthError::RepositoryFailure`] on storage failures
    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let subject = self.tokens.validate(token)?;

        let user = self
            .repo
            .find_by_id(subject)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_active() {
            return Err(AuthError::UserInactive);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use domain::{
        Email, HashedPassword, MockTokenService, MockUserRepository, TokenError, UserId,
    };
    use mockall::predicate::eq;

    fn test_user() -> User {
        User::new(
            Email::parse("test@example.com").unwrap(),
            HashedPassword::from_hash("hash".to_string()),
            None,
        )
    }

    fn tokens_resolving(subject: UserId) -> MockTokenService {
        let mut tokens = MockTokenService::new();
        tokens
            .expect_validate()
            .with(eq("token"))
            .returning(move |_| Ok(subject));
        tokens
    }

    #[tokio::test]
    async fn valid_token_returns_the_current_user() {
        let user = test_user();
        let subject = user.id();

        let mut repo = MockUserRepository::new();
        let found = user.clone();
        repo.expect_find_by_id()
            .with(eq(subject))
            .returning(move |_| Ok(Some(found.clone())));

        let use_case = ValidateToken::new(Arc::new(repo), Arc::new(tokens_resolving(subject)));
        let resolved = use_case.execute("token").await.unwrap();
        assert_eq!(resolved.id(), subject);
    }

    #[tokio::test]
    async fn expired_token_propagates_verbatim() {
        let mut tokens = MockTokenService::new();
        tokens
            .expect_validate()
            .returning(|_| Err(TokenError::Expired));

        let use_case = ValidateToken::new(Arc::new(MockUserRepository::new()), Arc::new(tokens));
        let result = use_case.execute("token").await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn garbage_token_is_invalid_without_a_lookup() {
        let mut tokens = MockTokenService::new();
        tokens
            .expect_validate()
            .returning(|_| Err(TokenError::Invalid));

        // No expectations on the repository: it must not be consulted.
        let use_case = ValidateToken::new(Arc::new(MockUserRepository::new()), Arc::new(tokens));
        let result = use_case.execute("garbage").await;
        assert!(matches!(result, Err(AuthError::TokenInvalid)));
    }

    #[tokio::test]
    async fn missing_subject_is_user_not_found() {
        let subject = UserId::new();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = ValidateToken::new(Arc::new(repo), Arc::new(tokens_resolving(subject)));
        let result = use_case.execute("token").await;
        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn deactivated_subject_is_user_inactive() {
        let mut user = test_user();
        user.deactivate();
        let subject = user.id();

        let mut repo = MockUserRepository::new();
        let found = user.clone();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));

        let use_case = ValidateToken::new(Arc::new(repo), Arc::new(tokens_resolving(subject)));
        let result = use_case.execute("token").await;

        // The token itself is still unexpired; deactivation alone revokes it.
        assert!(matches!(result, Err(AuthError::UserInactive)));
    }
}
