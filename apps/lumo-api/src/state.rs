//! Application state shared across request handlers.

use sqlx::PgPool;
use std::time::Instant;

/// Application state shared across all handlers.
///
/// Cloned per request; `PgPool` is internally reference-counted so the
/// clone is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: PgPool,
    /// Process start time, used for the health endpoint's uptime.
    pub started_at: Instant,
}

impl AppState {
    /// Create the application state.
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            started_at: Instant::now(),
        }
    }
}
