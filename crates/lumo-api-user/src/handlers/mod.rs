//! Handler functions for the user profile API endpoints.

pub mod delete;
pub mod password;
pub mod profile;

pub use delete::delete_user_handler;
pub use password::change_password_handler;
pub use profile::{get_user_handler, update_user_handler};
