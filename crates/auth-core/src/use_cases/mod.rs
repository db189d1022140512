//! Orchestrated business operations combining the entity and the ports.

pub mod login_user;
pub mod register_user;
pub mod validate_token;

pub use login_user::{LoginUser, LoginUserInput};
pub use register_user::{RegisterUser, RegisterUserInput};
pub use validate_token::ValidateToken;
