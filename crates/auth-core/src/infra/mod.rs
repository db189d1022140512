//! Reference implementations of the capability ports.
//!
//! Enough to wire the core and run it end to end without external services;
//! production deployments substitute their own repository behind the same
//! trait.

pub mod argon2_hasher;
pub mod jwt_tokens;
pub mod memory_repository;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt_tokens::JwtTokenService;
pub use memory_repository::InMemoryUserRepository;
