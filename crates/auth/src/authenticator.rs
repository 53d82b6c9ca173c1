//! Login and signup over an injected [`UserStore`].

use crate::error::{AuthError, AuthResult};
use crate::password::PasswordHash;
use crate::store::UserStore;
use tracing::{info, warn};

pub struct Authenticator<S: UserStore> {
    store: S,
}

impl<S: UserStore> Authenticator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether `username` is registered
    pub fn user_exists(&self, username: &str) -> AuthResult<bool> {
        Ok(self.store.lookup(username)?.is_some())
    }

    /// Check `password` for `username`.
    pub fn login(&self, username: &str, password: &str) -> AuthResult<()> {
        let hash = self.store.lookup(username)?.ok_or(AuthError::UnknownUser)?;

        if !hash.verify(username, password) {
            warn!(username = %username, "Rejected login");
            return Err(AuthError::IncorrectPassword);
        }

        info!(username = %username, "User logged in");
        Ok(())
    }

    /// Register `username` if `password` and `confirmation` agree.
    ///
    /// The username is checked first, so a taken name is reported even
    /// when the passwords also disagree.
    pub fn signup(&self, username: &str, password: &str, confirmation: &str) -> AuthResult<()> {
        if username.trim().is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        if self.user_exists(username)? {
            return Err(AuthError::UsernameTaken);
        }
        if password != confirmation {
            return Err(AuthError::PasswordMismatch);
        }

        self.store
            .create(username, PasswordHash::derive(username, password))?;
        info!(username = %username, "User signed up");
        Ok(())
    }
}
