use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is constructed by the entry point and injected here; there is no
/// ambient global persistence handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: rentledger_db::DbPool,
    /// Server configuration (JWT secret, CORS origins, timeouts).
    pub config: Arc<ServerConfig>,
}
