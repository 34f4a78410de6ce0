//! Response models.

use chrono::{DateTime, Utc};
use lumo_db::User;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// The caller's own user record, as returned by `GET /user/`.
///
/// This mirrors the stored row field-for-field, including `password_hash`.
/// Exposing the hash to its owner is questionable but is the documented
/// behavior of this API; do not drop the field without an API version bump.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// User id.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Argon2id password hash (PHC string).
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            password_hash: user.password_hash,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Simple acknowledgment body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome description.
    pub message: String,
}

impl MessageResponse {
    /// The acknowledgment returned by a successful profile update.
    #[must_use]
    pub fn profile_updated() -> Self {
        Self {
            message: "Profile updated successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: Some("Alice".to_string()),
            last_name: None,
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_response_carries_every_row_field() {
        let user = sample_user();
        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();

        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["first_name"], "Alice");
        assert!(json["last_name"].is_null());
        // The hash is part of the response surface. See the type docs.
        assert_eq!(json["password_hash"], user.password_hash);
    }

    #[test]
    fn test_profile_updated_message() {
        let response = MessageResponse::profile_updated();
        assert_eq!(response.message, "Profile updated successfully");
    }
}
