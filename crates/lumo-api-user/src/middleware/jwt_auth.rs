//! Session token authentication middleware.
//!
//! Extracts the bearer token from the Authorization header, validates it
//! against the configured secret, and inserts the caller's `UserId` into
//! request extensions. Handlers never see an unauthenticated request.

use crate::error::ApiUserError;
use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use lumo_auth::decode_token;
use std::sync::Arc;

/// Shared secret used to validate session tokens.
///
/// Inserted into the router as an `Extension` layer at startup.
#[derive(Clone)]
pub struct JwtSecret(pub Arc<String>);

impl JwtSecret {
    /// Wrap a secret string.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Arc::new(secret.into()))
    }
}

/// Session token authentication middleware.
///
/// On success the request proceeds with `UserId` available via
/// `Extension<UserId>`; every failure short-circuits with the 401 problem
/// document before any handler or database access. The specific failure
/// reason goes to the log, not to the caller.
pub async fn jwt_auth_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let secret = request
        .extensions()
        .get::<JwtSecret>()
        .ok_or_else(|| {
            ApiUserError::Internal("Session token secret not configured".to_string())
                .into_response()
        })?
        .0
        .clone();

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::debug!("Missing Authorization header");
            ApiUserError::Unauthorized.into_response()
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::debug!("Invalid Authorization header format");
        ApiUserError::Unauthorized.into_response()
    })?;

    if token.is_empty() {
        tracing::warn!("Rejected empty bearer token");
        return Err(ApiUserError::Unauthorized.into_response());
    }

    let claims = decode_token(token, secret.as_bytes()).map_err(|e| {
        tracing::warn!("Session token validation failed: {}", e);
        ApiUserError::Unauthorized.into_response()
    })?;

    let user_id = claims.user_id().ok_or_else(|| {
        tracing::warn!(sub = %claims.sub, "Token subject is not a user id");
        ApiUserError::Unauthorized.into_response()
    })?;

    request.extensions_mut().insert(user_id);

    Ok(next.run(request).await)
}
