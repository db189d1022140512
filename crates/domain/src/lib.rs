//! Domain layer - Core authentication entities, value objects and ports.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Concrete repositories, hashers and token signers live behind the port
//! traits defined in [`ports`].

pub mod error;
pub mod ports;
pub mod user;

pub use error::{AuthError, AuthResult};
pub use ports::{
    AccessToken, HasherError, PasswordHasher, RepositoryError, TokenError, TokenService,
    UserRepository,
};
pub use user::{Email, HashedPassword, User, UserId, UserView};

#[cfg(feature = "test-utils")]
pub use ports::{MockPasswordHasher, MockTokenService, MockUserRepository};
