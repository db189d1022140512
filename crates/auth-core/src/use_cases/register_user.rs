//! User registration use case.

use std::sync::Arc;

use tracing::info;

use domain::{AuthError, AuthResult, Email, User, UserRepository};

use crate::hashing::HashingPool;

/// Input for user registration.
#[derive(Debug)]
pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// Registers a new user: validates the email, hashes the password off the
/// async scheduler, and inserts the user.
///
/// The existence pre-check is an optimization only; the repository's
/// uniqueness guarantee is authoritative, so a duplicate reported by the
/// insert (a concurrent writer won the race) surfaces as the same
/// `EmailAlreadyExists` as the pre-check.
pub struct RegisterUser {
    repo: Arc<dyn UserRepository>,
    hashing: HashingPool,
}

impl RegisterUser {
    pub fn new(repo: Arc<dyn UserRepository>, hashing: HashingPool) -> Self {
        Self { repo, hashing }
    }

    /// Execute the registration.
    ///
    /// # Errors
    /// - [`AuthError::InvalidEmail`] if the email is malformed
    /// - [`AuthError::EmailAlreadyExists`] if the email is taken, whether
    ///   detected by the pre-check or by the insert
    /// - [`AuthError::HashingFailure`] / [`AuthError::RepositoryFailure`] on
    ///   infrastructure failures
    pub async fn execute(&self, input: RegisterUserInput) -> AuthResult<User> {
        let email = Email::parse(&input.email)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }

        // A hasher failure is fatal to the operation; there is no fallback
        // to a weaker scheme.
        let hashed_password = self.hashing.hash(input.password).await?;

        let user = User::new(email, hashed_password, input.display_name);
        self.repo.insert(&user).await?;

        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}
