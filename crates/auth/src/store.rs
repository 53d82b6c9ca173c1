//! User store abstraction and its implementations.
//!
//! Authentication never touches a concrete map; it goes through
//! [`UserStore`], so a persistent store can replace the in-memory one.

use crate::error::{AuthError, AuthResult};
use crate::password::PasswordHash;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info};

/// Username to password-hash storage
pub trait UserStore: Send + Sync {
    /// Hash stored for `username`, `None` if no such user
    fn lookup(&self, username: &str) -> AuthResult<Option<PasswordHash>>;

    /// Register a new user. Fails with `UsernameTaken` if the name exists.
    fn create(&self, username: &str, hash: PasswordHash) -> AuthResult<()>;
}

/// Boxed stores are stores too, so the binary can pick one at runtime.
impl<S: UserStore + ?Sized> UserStore for Box<S> {
    fn lookup(&self, username: &str) -> AuthResult<Option<PasswordHash>> {
        (**self).lookup(username)
    }

    fn create(&self, username: &str, hash: PasswordHash) -> AuthResult<()> {
        (**self).create(username, hash)
    }
}

/// Process-local store; users vanish when the process exits
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, PasswordHash>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn lookup(&self, username: &str) -> AuthResult<Option<PasswordHash>> {
        let users = self.users.read().map_err(|_| AuthError::Poisoned)?;
        Ok(users.get(username).cloned())
    }

    fn create(&self, username: &str, hash: PasswordHash) -> AuthResult<()> {
        let mut users = self.users.write().map_err(|_| AuthError::Poisoned)?;
        if users.contains_key(username) {
            return Err(AuthError::UsernameTaken);
        }
        users.insert(username.to_string(), hash);
        Ok(())
    }
}

/// Store persisted as a JSON object `{ "username": "<hex hash>" }`.
///
/// The whole file is rewritten on every successful `create`.
pub struct JsonFileUserStore {
    path: PathBuf,
    users: RwLock<BTreeMap<String, PasswordHash>>,
}

impl JsonFileUserStore {
    /// Load the store at `path`; a missing file is an empty store
    pub fn open(path: impl AsRef<Path>) -> AuthResult<Self> {
        let path = path.as_ref().to_path_buf();
        let users: BTreeMap<String, PasswordHash> = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(path = %path.display(), user_count = users.len(), "Opened user store");
        Ok(Self {
            path,
            users: RwLock::new(users),
        })
    }

    fn persist(&self, users: &BTreeMap<String, PasswordHash>) -> AuthResult<()> {
        let contents = serde_json::to_string_pretty(users)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), "Persisted user store");
        Ok(())
    }
}

impl UserStore for JsonFileUserStore {
    fn lookup(&self, username: &str) -> AuthResult<Option<PasswordHash>> {
        let users = self.users.read().map_err(|_| AuthError::Poisoned)?;
        Ok(users.get(username).cloned())
    }

    fn create(&self, username: &str, hash: PasswordHash) -> AuthResult<()> {
        let mut users = self.users.write().map_err(|_| AuthError::Poisoned)?;
        if users.contains_key(username) {
            return Err(AuthError::UsernameTaken);
        }
        users.insert(username.to_string(), hash);

        if let Err(e) = self.persist(&users) {
            // Keep memory and disk in agreement
            users.remove(username);
            return Err(e);
        }
        Ok(())
    }
}
