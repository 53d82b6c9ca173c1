//! User authentication for the console session.
//!
//! - **store**: the `UserStore` trait, an in-memory store and a JSON file store
//! - **password**: salted SHA-256 password hashes
//! - **authenticator**: login and signup rules on top of any store

pub mod authenticator;
pub mod error;
pub mod password;
pub mod store;

pub use authenticator::Authenticator;
pub use error::{AuthError, AuthResult};
pub use password::PasswordHash;
pub use store::{InMemoryUserStore, JsonFileUserStore, UserStore};
