//! Authentication core: use cases, facade and reference adapters.
//!
//! Transport adapters construct an [`Authenticator`] over their chosen port
//! implementations and consume it through the [`AuthService`] trait; they
//! never touch the use cases or entities directly.

pub mod config;
pub mod hashing;
pub mod infra;
pub mod service;
pub mod use_cases;

pub use config::AuthConfig;
pub use hashing::HashingPool;
pub use service::{AuthService, Authenticator, LoginOutput};
pub use use_cases::{LoginUserInput, RegisterUserInput};
