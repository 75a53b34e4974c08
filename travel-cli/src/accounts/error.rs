//! Account error types.

/// Errors raised by the user registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// Sign-up with a username that is already taken
    #[error("username {0:?} already exists")]
    DuplicateUser(String),

    /// Login with an unknown username
    #[error("user {0:?} not found")]
    UserNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AccountError::DuplicateUser("alice".into());
        assert_eq!(err.to_string(), "username \"alice\" already exists");

        let err = AccountError::UserNotFound("bob".into());
        assert_eq!(err.to_string(), "user \"bob\" not found");
    }
}
