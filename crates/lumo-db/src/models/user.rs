//! User entity model.

use chrono::{DateTime, Utc};
use lumo_core::UserId;
use sqlx::FromRow;

/// A user account.
///
/// Rows are created by the external registration flow; this service only
/// mutates or deletes the row belonging to the authenticated caller.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// Login name (unique).
    pub username: String,

    /// Email address (unique).
    pub email: String,

    /// Given name.
    pub first_name: Option<String>,

    /// Family name.
    pub last_name: Option<String>,

    /// Argon2id password hash (PHC string). Never plaintext.
    pub password_hash: String,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Get the user ID as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.id)
    }

    /// Find a user by ID.
    pub async fn find_by_id(
        pool: &sqlx::PgPool,
        id: uuid::Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a user with an already-hashed password.
    ///
    /// Registration lives outside this service; this method exists for
    /// seeding and tests.
    pub async fn create(
        pool: &sqlx::PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }

    /// Partially update a user's profile fields.
    ///
    /// `None` fields are left untouched (`COALESCE`); there is no way to
    /// clear a field through this method. Returns the reloaded row, or
    /// `None` if no row matched.
    pub async fn update_profile(
        pool: &sqlx::PgPool,
        id: uuid::Uuid,
        username: Option<String>,
        email: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r#"
            UPDATE users
            SET username = COALESCE($2, username),
                email = COALESCE($3, email),
                first_name = COALESCE($4, first_name),
                last_name = COALESCE($5, last_name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&username)
        .bind(&email)
        .bind(&first_name)
        .bind(&last_name)
        .fetch_optional(pool)
        .await
    }

    /// Replace a user's password hash.
    ///
    /// Returns whether a row matched.
    pub async fn update_password_hash(
        pool: &sqlx::PgPool,
        id: uuid::Uuid,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(password_hash)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a user by ID.
    ///
    /// Returns the number of rows affected. Zero rows is not an error:
    /// deleting an already-deleted account is a no-op.
    pub async fn delete_by_id(pool: &sqlx::PgPool, id: uuid::Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
