//! Fixed-capacity user table.

use tracing::{debug, warn};

use crate::crypto::PasswordDigest;
use crate::error::{AuthError, AuthResult};

/// Maximum number of users the store can hold
pub const MAX_USERS: usize = 10;

/// Maximum username length in bytes
pub const MAX_USERNAME_LEN: usize = 31;

/// Maximum password length in bytes
pub const MAX_PASSWORD_LEN: usize = 63;

/// Account created by [`CredentialStore::with_default_user`]
const DEFAULT_USER: &str = "root";
const DEFAULT_PASSWORD: &str = "root";

/// A single user account
#[derive(Clone, Debug)]
pub struct UserRecord {
    /// Login name
    pub username: String,
    /// Digest of the password
    password: PasswordDigest,
}

impl UserRecord {
    fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: PasswordDigest::of(password),
        }
    }
}

/// In-memory credential store with a bounded user table
#[derive(Debug, Default)]
pub struct CredentialStore {
    users: Vec<UserRecord>,
    current_user: Option<String>,
}

impl CredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: Vec::with_capacity(MAX_USERS),
            current_user: None,
        }
    }

    /// Create a store seeded with the default `root` account
    pub fn with_default_user() -> Self {
        let mut store = Self::new();
        store.users.push(UserRecord::new(DEFAULT_USER, DEFAULT_PASSWORD));
        store
    }

    /// Add a user
    pub fn create_user(&mut self, username: &str, password: &str) -> AuthResult<()> {
        validate_field("username", username, MAX_USERNAME_LEN)?;
        validate_field("password", password, MAX_PASSWORD_LEN)?;

        if self.users.len() >= MAX_USERS {
            warn!(capacity = MAX_USERS, "credential store full");
            return Err(AuthError::StoreFull {
                capacity: MAX_USERS,
            });
        }

        if self.users.iter().any(|u| u.username == username) {
            return Err(AuthError::UserExists(username.to_string()));
        }

        self.users.push(UserRecord::new(username, password));
        debug!(username, "user created");
        Ok(())
    }

    /// Check a username/password pair and record the session on success
    pub fn verify_login(&mut self, username: &str, password: &str) -> AuthResult<()> {
        let found = self
            .users
            .iter()
            .any(|u| u.username == username && u.password.matches(password));

        if !found {
            warn!(username, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        self.current_user = Some(username.to_string());
        debug!(username, "login accepted");
        Ok(())
    }

    /// Name of the logged-in user, if any
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Whether a user is logged in
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// End the current session
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            debug!(username = %user, "logged out");
        }
    }

    /// Number of users in the table
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Look up a user by name
    pub fn user(&self, username: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.username == username)
    }
}

fn validate_field(field: &'static str, value: &str, max: usize) -> AuthResult<()> {
    if value.is_empty() {
        return Err(AuthError::EmptyField(field));
    }
    if value.len() > max {
        return Err(AuthError::FieldTooLong { field, max });
    }
    Ok(())
}
