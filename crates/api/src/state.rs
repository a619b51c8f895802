use std::sync::Arc;

use inkpot_storage::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: inkpot_db::DbPool,
    /// Server configuration (JWT settings, admin allow-list, storage settings).
    pub config: Arc<ServerConfig>,
    /// Object storage handle for the public image bucket.
    pub store: ObjectStore,
}
