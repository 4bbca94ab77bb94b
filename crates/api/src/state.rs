use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is internally reference-counted).
/// The pool is the only shared mutable resource in the process; handlers
/// never share any other in-memory state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup.
    pub pool: milestones_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
