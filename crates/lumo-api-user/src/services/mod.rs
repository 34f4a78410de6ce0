//! Services for the user profile API.

mod profile_service;

pub use profile_service::ProfileService;
