//! Request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request body for `PUT /user/password`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    /// Current password, verified before any mutation.
    pub password: String,

    /// New password.
    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_pass: String,
}

/// Request body for `PUT /user/edit_user`.
///
/// All fields are optional: absent fields are left untouched. There is no
/// way to clear a field through this endpoint (absent and explicit null are
/// both treated as "leave as is").
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New login name.
    pub username: Option<String>,

    /// New email address. Format is not validated here; accepted as-is.
    pub email: Option<String>,

    /// New given name.
    pub first_name: Option<String>,

    /// New family name.
    pub last_name: Option<String>,
}

impl UpdateUserRequest {
    /// Whether the patch carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_password_minimum_length() {
        let too_short = ChangePasswordRequest {
            password: "old".to_string(),
            new_pass: "five5".to_string(),
        };
        assert!(too_short.validate().is_err());

        let just_long_enough = ChangePasswordRequest {
            password: "old".to_string(),
            new_pass: "sixsix".to_string(),
        };
        assert!(just_long_enough.validate().is_ok());
    }

    #[test]
    fn test_current_password_is_not_length_checked() {
        // Only the new password has a minimum; the current one is whatever
        // the user registered with.
        let request = ChangePasswordRequest {
            password: "x".to_string(),
            new_pass: "longenough".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_patch_deserializes_to_all_none() {
        let request: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn test_partial_patch_keeps_other_fields_absent() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();
        assert_eq!(request.email.as_deref(), Some("a@b.com"));
        assert!(request.username.is_none());
        assert!(request.first_name.is_none());
        assert!(request.last_name.is_none());
    }
}
