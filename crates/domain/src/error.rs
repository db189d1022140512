//! Authentication error taxonomy.
//!
//! Every variant is recoverable at the use-case boundary. Transport adapters
//! map [`AuthError::code`] / [`AuthError::public_message`] to their own wire
//! format and must never forward internal detail verbatim.

use thiserror::Error;

use crate::ports::{HasherError, RepositoryError, TokenError};

/// Domain-level authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email does not match the basic address grammar.
    #[error("invalid email format")]
    InvalidEmail,

    /// A user with this normalized email already exists.
    #[error("a user with this email already exists")]
    EmailAlreadyExists,

    /// Unknown email or wrong password.
    ///
    /// Both root causes collapse into this single variant so that neither
    /// error content nor latency class distinguishes them to a caller.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Account has been deactivated.
    #[error("user account is inactive")]
    UserInactive,

    /// Token subject no longer resolves to a user.
    #[error("user not found")]
    UserNotFound,

    /// Token expiry instant has passed.
    #[error("token has expired")]
    TokenExpired,

    /// Malformed token or signature mismatch.
    #[error("token is invalid")]
    TokenInvalid,

    /// The hashing/signing primitive failed. Internal detail is logged, never
    /// surfaced.
    #[error("password hashing failed")]
    HashingFailure(String),

    /// The storage layer failed. Internal detail is logged, never surfaced.
    #[error("repository failure")]
    RepositoryFailure(String),
}

impl AuthError {
    /// Stable machine-readable kind for transport adapters.
    ///
    /// Both infrastructure variants collapse to `INTERNAL_ERROR`; the
    /// distinction is an internal concern.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidEmail => "INVALID_EMAIL",
            AuthError::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::UserInactive => "USER_INACTIVE",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::TokenInvalid => "TOKEN_INVALID",
            AuthError::HashingFailure(_) | AuthError::RepositoryFailure(_) => "INTERNAL_ERROR",
        }
    }

    /// Caller-safe message.
    ///
    /// Infrastructure failures log their full detail here and surface a
    /// generic message with no internal detail.
    pub fn public_message(&self) -> String {
        match self {
            AuthError::HashingFailure(detail) => {
                tracing::error!(detail = %detail, "password hashing failure");
                "An internal error occurred".to_string()
            }
            AuthError::RepositoryFailure(detail) => {
                tracing::error!(detail = %detail, "repository failure");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // The storage-level uniqueness constraint is the authoritative
            // duplicate check; it surfaces as the same business error as the
            // application-level pre-check.
            RepositoryError::DuplicateEmail => AuthError::EmailAlreadyExists,
            RepositoryError::Storage(detail) => AuthError::RepositoryFailure(detail),
        }
    }
}

impl From<HasherError> for AuthError {
    fn from(err: HasherError) -> Self {
        AuthError::HashingFailure(err.0)
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid => AuthError::TokenInvalid,
            TokenError::Signing(detail) => AuthError::HashingFailure(detail),
        }
    }
}

/// Result type alias for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infrastructure_detail_never_reaches_the_public_message() {
        let err = AuthError::RepositoryFailure("connection refused to 10.0.0.5:5432".to_string());
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert!(!err.public_message().contains("10.0.0.5"));

        let err = AuthError::HashingFailure("argon2 parameter error".to_string());
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert!(!err.public_message().contains("argon2"));
    }

    #[test]
    fn duplicate_key_maps_to_the_business_error() {
        let err = AuthError::from(RepositoryError::DuplicateEmail);
        assert!(matches!(err, AuthError::EmailAlreadyExists));
    }

    #[test]
    fn token_errors_map_verbatim() {
        assert!(matches!(
            AuthError::from(TokenError::Expired),
            AuthError::TokenExpired
        ));
        assert!(matches!(
            AuthError::from(TokenError::Invalid),
            AuthError::TokenInvalid
        ));
    }

    #[test]
    fn business_errors_expose_their_kind() {
        assert_eq!(AuthError::InvalidCredentials.code(), "INVALID_CREDENTIALS");
        assert_eq!(
            AuthError::InvalidCredentials.public_message(),
            "invalid email or password"
        );
    }
}
