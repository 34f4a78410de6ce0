//! User profile API router configuration.
//!
//! Configures routes for the self-service endpoints:
//! - GET /user/ - fetch own record
//! - PUT /user/password - change password
//! - PUT /user/edit_user - partial profile update
//! - DELETE /user/delete - delete own account
//!
//! Every route sits behind the session token middleware.

use crate::handlers::{
    change_password_handler, delete_user_handler, get_user_handler, update_user_handler,
};
use crate::middleware::{jwt_auth_middleware, JwtSecret};
use crate::services::ProfileService;
use axum::{
    middleware,
    routing::{delete, get, put},
    Extension, Router,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Application state for the user profile routes.
#[derive(Clone)]
pub struct UserApiState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Profile service for self-service operations.
    pub profile_service: Arc<ProfileService>,
    /// Secret used to validate session tokens.
    pub jwt_secret: JwtSecret,
}

impl UserApiState {
    /// Create a new user API state.
    pub fn new(pool: PgPool, jwt_secret: JwtSecret) -> Self {
        let profile_service = Arc::new(ProfileService::new(pool.clone()));
        Self {
            pool,
            profile_service,
            jwt_secret,
        }
    }
}

/// Create the `/user` router with all endpoints.
///
/// All endpoints require a valid bearer session token; the middleware
/// resolves it to a `UserId` before any handler runs.
pub fn user_router(state: UserApiState) -> Router {
    Router::new()
        .route("/", get(get_user_handler))
        .route("/password", put(change_password_handler))
        .route("/edit_user", put(update_user_handler))
        .route("/delete", delete(delete_user_handler))
        .layer(middleware::from_fn(jwt_auth_middleware))
        .layer(Extension(state.profile_service.clone()))
        .layer(Extension(state.jwt_secret.clone()))
}
