//! Salted SHA-256 password hashes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex-encoded SHA-256 of `username:password`.
///
/// The username acts as the salt so two users with the same password do
/// not share a hash.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn derive(username: &str, password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(username.as_bytes());
        hasher.update(b":");
        hasher.update(password.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Whether `password` hashes to this value for `username`
    pub fn verify(&self, username: &str, password: &str) -> bool {
        *self == Self::derive(username, password)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep hashes out of logs
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
