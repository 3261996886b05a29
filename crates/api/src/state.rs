use std::sync::Arc;

use pinchat_session::SessionClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pinchat_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Session/capability exchange client (trait object so tests can
    /// substitute a mock).
    pub session: Arc<dyn SessionClient>,
}
