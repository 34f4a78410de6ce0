//! Error types for the user profile API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error type for the user profile API.
#[derive(Debug, thiserror::Error)]
pub enum ApiUserError {
    /// Authentication required or the session token is unusable.
    #[error("Authentication required")]
    Unauthorized,

    /// Current password did not match the stored hash.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The caller's user row does not exist.
    #[error("User not found")]
    NotFound,

    /// Request body failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// RFC 7807 Problem Details response format.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for ApiUserError {
    fn into_response(self) -> Response {
        let (status, problem) = match &self {
            ApiUserError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ProblemDetails {
                    problem_type: "https://lumo.dev/problems/unauthorized".to_string(),
                    title: "Unauthorized".to_string(),
                    status: 401,
                    detail: Some("Missing or invalid authentication token".to_string()),
                },
            ),
            ApiUserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ProblemDetails {
                    problem_type: "https://lumo.dev/problems/invalid-credentials".to_string(),
                    title: "Unauthorized".to_string(),
                    status: 401,
                    detail: Some("Your password is incorrect".to_string()),
                },
            ),
            ApiUserError::NotFound => (
                StatusCode::NOT_FOUND,
                ProblemDetails {
                    problem_type: "https://lumo.dev/problems/not-found".to_string(),
                    title: "Not Found".to_string(),
                    status: 404,
                    detail: Some("User not found".to_string()),
                },
            ),
            ApiUserError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ProblemDetails {
                    problem_type: "https://lumo.dev/problems/validation-error".to_string(),
                    title: "Validation Error".to_string(),
                    status: 400,
                    detail: Some(msg.clone()),
                },
            ),
            ApiUserError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails {
                        problem_type: "https://lumo.dev/problems/internal-error".to_string(),
                        title: "Internal Server Error".to_string(),
                        status: 500,
                        detail: Some("An internal error occurred".to_string()),
                    },
                )
            }
            ApiUserError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProblemDetails {
                        problem_type: "https://lumo.dev/problems/internal-error".to_string(),
                        title: "Internal Server Error".to_string(),
                        status: 500,
                        detail: Some("A database error occurred".to_string()),
                    },
                )
            }
        };

        (status, Json(problem)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiUserError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(ApiUserError::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApiUserError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(ApiUserError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(ApiUserError::Validation("too short".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiUserError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ApiUserError::Database(sqlx::Error::RowNotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_problem_details_serialization() {
        let problem = ProblemDetails {
            problem_type: "https://lumo.dev/problems/not-found".to_string(),
            title: "Not Found".to_string(),
            status: 404,
            detail: Some("User not found".to_string()),
        };
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["type"], "https://lumo.dev/problems/not-found");
        assert_eq!(json["status"], 404);
    }

    #[test]
    fn test_detail_omitted_when_none() {
        let problem = ProblemDetails {
            problem_type: "https://lumo.dev/problems/unauthorized".to_string(),
            title: "Unauthorized".to_string(),
            status: 401,
            detail: None,
        };
        let json = serde_json::to_string(&problem).unwrap();
        assert!(!json.contains("detail"));
    }
}
