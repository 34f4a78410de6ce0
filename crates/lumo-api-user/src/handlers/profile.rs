//! Profile handlers.
//!
//! GET /user/ - fetch the caller's own record
//! PUT /user/edit_user - partial profile update

use crate::error::ApiUserError;
use crate::models::{MessageResponse, UpdateUserRequest, UserResponse};
use crate::services::ProfileService;
use axum::{Extension, Json};
use lumo_core::UserId;
use std::sync::Arc;

/// Handle `GET /user/`.
///
/// Returns the caller's full stored record. When the row is missing the
/// body is JSON `null` with a 200 status; this endpoint deliberately does
/// not 404 (see `ProfileService::get_profile`).
#[utoipa::path(
    get,
    path = "/user/",
    responses(
        (status = 200, description = "Caller's user record; JSON null if the row is missing", body = UserResponse),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "User"
)]
pub async fn get_user_handler(
    Extension(profile_service): Extension<Arc<ProfileService>>,
    Extension(user_id): Extension<UserId>,
) -> Result<Json<Option<UserResponse>>, ApiUserError> {
    let profile = profile_service.get_profile(user_id).await?;

    Ok(Json(profile))
}

/// Handle `PUT /user/edit_user`.
///
/// Applies a partial patch to the caller's profile. Absent fields are left
/// untouched; no field-level validation is applied beyond optionality.
#[utoipa::path(
    put,
    path = "/user/edit_user",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User row missing"),
    ),
    security(("bearerAuth" = [])),
    tag = "User"
)]
pub async fn update_user_handler(
    Extension(profile_service): Extension<Arc<ProfileService>>,
    Extension(user_id): Extension<UserId>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, ApiUserError> {
    tracing::info!(
        user_id = %user_id,
        username = ?request.username,
        email = ?request.email,
        "Updating profile"
    );

    let response = profile_service.update_profile(user_id, request).await?;

    Ok(Json(response))
}
