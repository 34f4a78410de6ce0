//! `OpenAPI` documentation and Swagger UI configuration.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::health::HealthResponse;
use crate::state::AppState;
use lumo_api_user::error::ProblemDetails;
use lumo_api_user::models::{
    ChangePasswordRequest, MessageResponse, UpdateUserRequest, UserResponse,
};

/// Security scheme modifier for Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .as_mut()
            .expect("components are always registered");
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// `OpenAPI` documentation for the lumo account API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "lumo account API",
        version = "0.1.0",
        description = "Self-service user profile management"
    ),
    paths(
        crate::health::health_handler,
        crate::health::livez_handler,
        lumo_api_user::handlers::profile::get_user_handler,
        lumo_api_user::handlers::profile::update_user_handler,
        lumo_api_user::handlers::password::change_password_handler,
        lumo_api_user::handlers::delete::delete_user_handler,
    ),
    components(schemas(
        HealthResponse,
        UserResponse,
        MessageResponse,
        UpdateUserRequest,
        ChangePasswordRequest,
        ProblemDetails,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "User", description = "Self-service profile management"),
    )
)]
pub struct ApiDoc;

/// Swagger UI routes serving the generated document at `/docs`.
pub fn swagger_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_all_user_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/user/"));
        assert!(paths.iter().any(|p| p.as_str() == "/user/password"));
        assert!(paths.iter().any(|p| p.as_str() == "/user/edit_user"));
        assert!(paths.iter().any(|p| p.as_str() == "/user/delete"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }

    #[test]
    fn test_openapi_document_serializes() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("bearerAuth"));
    }
}
