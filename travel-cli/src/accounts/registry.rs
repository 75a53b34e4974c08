//! The in-memory user registry.
//!
//! Constructed once in `main` and passed into the CLI layer, rather
//! than living as a process-wide global.

use crate::domain::Money;

use super::{AccountError, User};

/// Registry of all known users.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a user by name.
    pub fn find(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username() == username)
    }

    /// Looks up a user by name, mutably.
    pub fn find_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.username() == username)
    }

    /// Registers a new user with the given starting balance.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateUser` if the username is already taken.
    pub fn create(&mut self, username: &str, wallet: Money) -> Result<&mut User, AccountError> {
        if self.find(username).is_some() {
            return Err(AccountError::DuplicateUser(username.to_string()));
        }
        self.users.push(User::new(username, wallet));
        // Just pushed, so the vector is non-empty.
        Ok(self.users.last_mut().unwrap())
    }

    /// Resolves a login attempt.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown username.
    pub fn login(&mut self, username: &str) -> Result<&mut User, AccountError> {
        self.find_mut(username)
            .ok_or_else(|| AccountError::UserNotFound(username.to_string()))
    }

    /// Returns the number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if nobody has signed up yet.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
