//! User aggregate and associated value objects.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Basic address grammar: non-empty local part, non-empty domain with a dot,
/// no whitespace or second `@` anywhere.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Unique identifier for a user. Randomly generated, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a UserId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID value.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Email value object, normalized to lowercase.
///
/// Two emails are equal iff their normalized forms are equal; the raw input
/// casing is never kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parse and normalize an email address.
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidEmail`] if the input does not match the
    /// basic address grammar.
    pub fn parse(value: &str) -> AuthResult<Self> {
        let normalized = value.trim().to_lowercase();

        if !EMAIL_RE.is_match(&normalized) {
            return Err(AuthError::InvalidEmail);
        }

        Ok(Self(normalized))
    }

    /// Get the normalized email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque encoded output of the password hasher.
///
/// The domain never holds plaintext passwords; this type additionally redacts
/// itself from debug output and implements no serde traits, so the hash
/// cannot reach a log line or a response body.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wrap an already-encoded hash produced by a `PasswordHasher`.
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    /// Get the encoded hash for verification or storage.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HashedPassword").field(&"[REDACTED]").finish()
    }
}

/// User aggregate.
///
/// Created exclusively by the registration use case; rehydrated from storage
/// through [`User::from_persistence`]. Fields stay private so every mutation
/// goes through a method that maintains `updated_at`.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    hashed_password: HashedPassword,
    display_name: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with a fresh id and now-timestamps.
    pub fn new(email: Email, hashed_password: HashedPassword, display_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email,
            hashed_password,
            display_name,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruct a user from persisted state.
    ///
    /// The stored email is trusted to already be normalized and valid.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: UserId,
        email: Email,
        hashed_password: HashedPassword,
        display_name: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            hashed_password,
            display_name,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn hashed_password(&self) -> &HashedPassword {
        &self.hashed_password
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Deactivate the account. Token validation observes this on every call,
    /// so flipping it revokes all outstanding tokens immediately.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivate the account.
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }
}

/// Minimal, non-sensitive user projection (safe to return to callers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    /// Unique user identifier
    pub id: Uuid,
    /// Normalized email address
    pub email: String,
    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_uuid(),
            email: user.email.as_str().to_string(),
            display_name: user.display_name.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_valid_addresses() {
        assert!(Email::parse("test@example.com").is_ok());
        assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
    }

    #[test]
    fn email_rejects_invalid_addresses() {
        assert!(Email::parse("").is_err());
        assert!(Email::parse("invalid").is_err());
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("test@").is_err());
        assert!(Email::parse("test@domain").is_err());
        assert!(Email::parse("two@at@signs.com").is_err());
        assert!(Email::parse("spa ce@domain.com").is_err());
    }

    #[test]
    fn email_is_normalized() {
        let email = Email::parse("  TEST@EXAMPLE.COM  ").unwrap();
        assert_eq!(email.as_str(), "test@example.com");
    }

    #[test]
    fn emails_compare_by_normalized_form() {
        let a = Email::parse("Alice@Example.Com").unwrap();
        let b = Email::parse("alice@example.com").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn new_user_is_active_with_fresh_id() {
        let email = Email::parse("test@example.com").unwrap();
        let password = HashedPassword::from_hash("hash".to_string());
        let user = User::new(email, password, Some("Test User".to_string()));

        assert!(user.is_active());
        assert_eq!(user.email().as_str(), "test@example.com");
        assert_eq!(user.display_name(), Some("Test User"));
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn deactivate_flips_state_and_bumps_updated_at() {
        let email = Email::parse("test@example.com").unwrap();
        let password = HashedPassword::from_hash("hash".to_string());
        let mut user = User::new(email, password, None);

        user.deactivate();
        assert!(!user.is_active());
        assert!(user.updated_at() >= user.created_at());

        user.activate();
        assert!(user.is_active());
    }

    #[test]
    fn hashed_password_debug_is_redacted() {
        let hash = HashedPassword::from_hash("$argon2id$v=19$secret".to_string());
        let rendered = format!("{:?}", hash);
        assert!(!rendered.contains("argon2"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn user_view_omits_the_hash() {
        let email = Email::parse("test@example.com").unwrap();
        let password = HashedPassword::from_hash("$argon2id$v=19$secret".to_string());
        let user = User::new(email, password, Some("Test".to_string()));

        let view = UserView::from(&user);
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("test@example.com"));
    }
}
