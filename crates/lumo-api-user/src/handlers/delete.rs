//! Account deletion handler.
//!
//! DELETE /user/delete - delete the caller's own account.

use crate::error::ApiUserError;
use crate::services::ProfileService;
use axum::{http::StatusCode, Extension};
use lumo_core::UserId;
use std::sync::Arc;

/// Handle `DELETE /user/delete`.
///
/// Idempotent: deleting an already-deleted account still answers 204.
#[utoipa::path(
    delete,
    path = "/user/delete",
    responses(
        (status = 204, description = "Account deleted (or already gone)"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "User"
)]
pub async fn delete_user_handler(
    Extension(profile_service): Extension<Arc<ProfileService>>,
    Extension(user_id): Extension<UserId>,
) -> Result<StatusCode, ApiUserError> {
    profile_service.delete_account(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
