//! Self-service user profile API.
//!
//! Four operations, all scoped to the authenticated caller's own row:
//! - `GET /user/` - fetch own record
//! - `PUT /user/password` - change password
//! - `PUT /user/edit_user` - partial profile update
//! - `DELETE /user/delete` - delete own account
//!
//! Authentication is a bearer session token; the middleware resolves it to
//! a `UserId` before any handler runs.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiUserError;
pub use middleware::{jwt_auth_middleware, JwtSecret};
pub use router::{user_router, UserApiState};
pub use services::ProfileService;
