//! Error types for the credential store

/// Errors from credential store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The store already holds the maximum number of users
    StoreFull {
        /// Fixed capacity of the store
        capacity: usize,
    },

    /// Username or password was empty
    EmptyField(&'static str),

    /// Username or password exceeds its length bound
    FieldTooLong {
        /// Which field was too long
        field: &'static str,
        /// Maximum accepted length in bytes
        max: usize,
    },

    /// A user with this name already exists
    UserExists(String),

    /// Username/password pair did not match any user
    InvalidCredentials,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoreFull { capacity } => {
                write!(f, "credential store full ({} users)", capacity)
            }
            Self::EmptyField(field) => write!(f, "{} must not be empty", field),
            Self::FieldTooLong { field, max } => {
                write!(f, "{} longer than {} bytes", field, max)
            }
            Self::UserExists(name) => write!(f, "user already exists: {}", name),
            Self::InvalidCredentials => write!(f, "invalid username or password"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Result type alias for credential operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::StoreFull { capacity: 10 };
        assert_eq!(err.to_string(), "credential store full (10 users)");

        let err = AuthError::EmptyField("password");
        assert_eq!(err.to_string(), "password must not be empty");

        let err = AuthError::FieldTooLong {
            field: "username",
            max: 31,
        };
        assert_eq!(err.to_string(), "username longer than 31 bytes");

        let err = AuthError::UserExists("root".to_string());
        assert_eq!(err.to_string(), "user already exists: root");

        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid username or password"
        );
    }
}
