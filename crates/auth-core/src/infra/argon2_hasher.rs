//! Argon2 implementation of the password hashing port.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2,
};

use domain::{HashedPassword, HasherError, PasswordHasher};

/// Password hasher backed by argon2id with default parameters.
///
/// Each `hash` call generates a fresh random salt, so equal passwords never
/// produce equal hashes. The work factor is what makes login/registration
/// CPU-expensive; callers schedule it through the hashing pool.
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<HashedPassword, HasherError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| HasherError(format!("failed to hash password: {e}")))?;

        Ok(HashedPassword::from_hash(hash.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &HashedPassword) -> Result<bool, HasherError> {
        let parsed = PasswordHash::new(hash.as_str())
            .map_err(|e| HasherError(format!("invalid password hash encoding: {e}")))?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HasherError(format!("password verification error: {e}"))),
        }
    }
}
