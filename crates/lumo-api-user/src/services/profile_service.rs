//! Profile management service.
//!
//! All four operations are scoped to the caller's own row. Each call is a
//! single request-scoped unit of work: locate the row, optionally verify
//! credentials, mutate, respond. No state is shared between requests;
//! concurrent edits of the same row are last-writer-wins at the database.

use crate::error::ApiUserError;
use crate::models::{MessageResponse, UpdateUserRequest, UserResponse};
use lumo_auth::{hash_password, verify_password};
use lumo_core::UserId;
use lumo_db::User;
use sqlx::PgPool;
use tracing::info;

/// Profile management service.
#[derive(Clone)]
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    /// Create a new profile service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the caller's own record.
    ///
    /// Returns `None` when the row is missing. Unlike `update_profile` this
    /// is not an error; the endpoint answers 200 with a null body, which is
    /// the documented behavior of this API.
    pub async fn get_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserResponse>, ApiUserError> {
        let user = User::find_by_id(&self.pool, *user_id.as_uuid()).await?;

        Ok(user.map(UserResponse::from))
    }

    /// Change the caller's password.
    ///
    /// The current password must verify against the stored hash before any
    /// mutation happens. New-password length is checked at the handler
    /// boundary, before this method runs.
    pub async fn change_password(
        &self,
        user_id: UserId,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiUserError> {
        let user = User::find_by_id(&self.pool, *user_id.as_uuid())
            .await?
            .ok_or_else(|| ApiUserError::Internal("User row missing for valid session".to_string()))?;

        let valid = verify_password(current_password, &user.password_hash)
            .map_err(|e| ApiUserError::Internal(format!("Password verification failed: {e}")))?;

        if !valid {
            tracing::debug!(user_id = %user_id, "Invalid current password during password change");
            return Err(ApiUserError::InvalidCredentials);
        }

        let new_hash = hash_password(new_password)
            .map_err(|e| ApiUserError::Internal(format!("Failed to hash password: {e}")))?;

        let updated = User::update_password_hash(&self.pool, *user_id.as_uuid(), &new_hash).await?;
        if !updated {
            // The row was there for the verify step but gone by the update.
            tracing::warn!(user_id = %user_id, "User row disappeared during password change");
            return Err(ApiUserError::Internal(
                "User row disappeared during password change".to_string(),
            ));
        }

        info!(user_id = %user_id, "Password changed");

        Ok(())
    }

    /// Partially update the caller's profile fields.
    ///
    /// Absent fields are left untouched; a patch with no fields at all is a
    /// valid no-op that still reloads and acknowledges. A missing row is 404
    /// here (unlike `get_profile`).
    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> Result<MessageResponse, ApiUserError> {
        // An all-absent patch must leave the row byte-identical, so it never
        // reaches the UPDATE (which would touch updated_at). The row still
        // has to exist for the operation to succeed.
        if request.is_empty() {
            User::find_by_id(&self.pool, *user_id.as_uuid())
                .await?
                .ok_or(ApiUserError::NotFound)?;

            return Ok(MessageResponse::profile_updated());
        }

        let updated = User::update_profile(
            &self.pool,
            *user_id.as_uuid(),
            request.username,
            request.email,
            request.first_name,
            request.last_name,
        )
        .await?
        .ok_or(ApiUserError::NotFound)?;

        info!(user_id = %updated.id, "Profile updated");

        Ok(MessageResponse::profile_updated())
    }

    /// Delete the caller's own account.
    ///
    /// Idempotent: zero rows affected still reports success, by design.
    pub async fn delete_account(&self, user_id: UserId) -> Result<(), ApiUserError> {
        let rows = User::delete_by_id(&self.pool, *user_id.as_uuid()).await?;

        info!(user_id = %user_id, rows_deleted = rows, "Account deletion requested");

        Ok(())
    }
}
