//! Middleware for the user profile API.

mod jwt_auth;

pub use jwt_auth::{jwt_auth_middleware, JwtSecret};
