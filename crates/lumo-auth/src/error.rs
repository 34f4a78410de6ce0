//! Error types for authentication operations.

use thiserror::Error;

/// Authentication error types.
///
/// Each variant maps to a specific failure mode in token or password
/// handling, so callers can distinguish "expired session" from "broken
/// stored hash" without string matching.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Token errors
    /// Token has expired (exp claim is in the past).
    #[error("Token has expired")]
    TokenExpired,

    /// Token signature does not match the configured secret.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token is malformed or carries unusable claims.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    // Password errors
    /// Password hashing operation failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored password hash is not a valid PHC string.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

impl AuthError {
    /// Check if this error is related to token validation.
    #[must_use]
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            AuthError::TokenExpired | AuthError::InvalidSignature | AuthError::InvalidToken(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(AuthError::TokenExpired.to_string(), "Token has expired");
        assert_eq!(
            AuthError::InvalidToken("bad segment".to_string()).to_string(),
            "Invalid token: bad segment"
        );
        assert_eq!(
            AuthError::InvalidHashFormat.to_string(),
            "Invalid password hash format"
        );
    }

    #[test]
    fn test_is_token_error() {
        assert!(AuthError::TokenExpired.is_token_error());
        assert!(AuthError::InvalidSignature.is_token_error());
        assert!(!AuthError::InvalidHashFormat.is_token_error());
        assert!(!AuthError::HashingFailed("x".to_string()).is_token_error());
    }
}
