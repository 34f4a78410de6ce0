//! Session token claims.

use chrono::{Duration, Utc};
use lumo_core::UserId;
use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
///
/// Standard RFC 7519 claims only: the subject is the user's UUID. Roles and
/// the rest of the caller's state live in the database, not the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user id as a UUID string.
    pub sub: String,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, expiring `ttl_secs` from now.
    #[must_use]
    pub fn for_user(user_id: UserId, ttl_secs: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
        }
    }

    /// Parse the subject claim into a typed `UserId`.
    ///
    /// Returns `None` when `sub` is not a UUID, which callers treat the same
    /// as an invalid token.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user_sets_expiry_after_issue() {
        let claims = Claims::for_user(UserId::new(), 3600);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_user_id_roundtrip() {
        let id = UserId::new();
        let claims = Claims::for_user(id, 60);
        assert_eq!(claims.user_id(), Some(id));
    }

    #[test]
    fn test_user_id_rejects_non_uuid_subject() {
        let claims = Claims {
            sub: "service-account".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        assert_eq!(claims.user_id(), None);
    }
}
