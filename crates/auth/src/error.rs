use thiserror::Error;

/// Authentication and user store failures
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username not found.")]
    UnknownUser,

    #[error("Incorrect password. Please try again.")]
    IncorrectPassword,

    #[error("Username already exists. Please try a different one.")]
    UsernameTaken,

    #[error("Passwords do not match. Please try again.")]
    PasswordMismatch,

    #[error("Username cannot be empty.")]
    EmptyUsername,

    #[error("User store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("User store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// A lock guarding the store was poisoned by a panicking writer
    #[error("User store is unavailable")]
    Poisoned,
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;
