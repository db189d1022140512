//! Capability ports the use cases depend on.
//!
//! These traits are the only surface the use-case layer sees; concrete
//! repositories, hashers and token signers are injected at wiring time.

use async_trait::async_trait;
use chrono::Duration;
use thiserror::Error;

use crate::user::{Email, HashedPassword, User, UserId};

#[cfg(feature = "test-utils")]
use mockall::automock;

/// Repository-level failures.
///
/// The duplicate-key condition has its own variant so registration can map it
/// to a business error instead of an infrastructure error: the storage-level
/// uniqueness constraint, not the pre-check, is authoritative under
/// concurrent writes.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A user with the same normalized email already exists.
    #[error("a user with this email already exists")]
    DuplicateEmail,

    /// Any other storage failure (connection, timeout, constraint, ...).
    #[error("storage failure: {0}")]
    Storage(String),
}

/// User persistence port. Exclusively owns user storage; the domain only
/// holds transient in-memory copies during a use-case invocation.
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id. `Ok(None)` when no such user exists.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Find a user by normalized email. `Ok(None)` when no such user exists.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Insert a new user atomically.
    ///
    /// # Errors
    /// [`RepositoryError::DuplicateEmail`] when another user already holds
    /// the same normalized email, including when a concurrent writer won the
    /// race after a caller's pre-check.
    async fn insert(&self, user: &User) -> Result<(), RepositoryError>;
}

/// Password hasher failure. Verification mismatches are *not* errors; they
/// are the `Ok(false)` return of [`PasswordHasher::verify`].
#[derive(Error, Debug)]
#[error("password hashing failure: {0}")]
pub struct HasherError(pub String);

/// Password hashing port.
///
/// Hashing is deliberately slow (tens to hundreds of milliseconds of CPU
/// work). Implementations are synchronous; callers must schedule them off
/// the cooperative scheduler, see the use-case layer's hashing pool.
#[cfg_attr(feature = "test-utils", automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh random salt.
    fn hash(&self, plaintext: &str) -> Result<HashedPassword, HasherError>;

    /// Verify a plaintext password against an encoded hash.
    fn verify(&self, plaintext: &str, hash: &HashedPassword) -> Result<bool, HasherError>;
}

/// Token signing/validation failures.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The token's expiry instant has passed.
    #[error("token has expired")]
    Expired,

    /// Malformed token or signature mismatch.
    #[error("token is invalid")]
    Invalid,

    /// The signing primitive itself failed while issuing.
    #[error("token signing failure: {0}")]
    Signing(String),
}

/// A signed, time-bounded identity token, opaque once issued.
///
/// The core never persists tokens; revocation happens through account
/// deactivation, observed at validation time.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a signed token produced by a `TokenService`.
    pub fn new(token: String) -> Self {
        Self(token)
    }

    /// Get the encoded token to hand to the caller.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// A bearer token is a credential; keep it out of debug output.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// Token issuance/validation port.
///
/// Fast, non-blocking cryptographic computation. Validation checks signature
/// and expiry only; it knows nothing about account state, which is why the
/// validation use case re-fetches the user afterwards.
#[cfg_attr(feature = "test-utils", automock)]
pub trait TokenService: Send + Sync {
    /// Issue a token for `subject` expiring `ttl` from now.
    fn issue(&self, subject: UserId, ttl: Duration) -> Result<AccessToken, TokenError>;

    /// Validate a token and extract its subject.
    fn validate(&self, token: &str) -> Result<UserId, TokenError>;
}
