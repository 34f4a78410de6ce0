//! Shared core types for lumo.
//!
//! Currently this is just the strongly typed identifier for user accounts.
//! Keeping it in its own crate lets the database and API crates agree on the
//! type without depending on each other.

mod ids;

pub use ids::{ParseIdError, UserId};
