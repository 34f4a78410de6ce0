//! Database layer for lumo.
//!
//! Models are plain `sqlx::FromRow` structs with static query methods; all
//! queries go through a shared `PgPool`. Connections are acquired per query
//! and returned to the pool on every exit path.

mod error;
mod migrations;
pub mod models;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::User;
