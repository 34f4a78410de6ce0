//! Password change handler.
//!
//! PUT /user/password - change the caller's password.

use crate::error::ApiUserError;
use crate::models::ChangePasswordRequest;
use crate::services::ProfileService;
use axum::{http::StatusCode, Extension, Json};
use lumo_core::UserId;
use std::sync::Arc;
use validator::Validate;

/// Handle `PUT /user/password`.
///
/// The new password must be at least 6 characters; that check runs before
/// the current password is verified, so an under-length request never
/// touches the stored hash.
#[utoipa::path(
    put,
    path = "/user/password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "New password too short"),
        (status = 401, description = "Not authenticated or wrong current password"),
    ),
    security(("bearerAuth" = [])),
    tag = "User"
)]
pub async fn change_password_handler(
    Extension(profile_service): Extension<Arc<ProfileService>>,
    Extension(user_id): Extension<UserId>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiUserError> {
    request.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
            })
            .collect();
        ApiUserError::Validation(errors.join(", "))
    })?;

    profile_service
        .change_password(user_id, &request.password, &request.new_pass)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
