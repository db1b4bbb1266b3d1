//! Shared application state for all routes.
//!
//! The pool is built once at startup (`store::connect`) and injected here, so
//! services never reach for process-global storage.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
