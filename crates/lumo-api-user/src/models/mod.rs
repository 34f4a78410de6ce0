//! Request and response models for the user profile API.

mod requests;
mod responses;

pub use requests::{ChangePasswordRequest, UpdateUserRequest};
pub use responses::{MessageResponse, UserResponse};
