//! Health check handler.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
///
/// Liveness probe. Reports the crate version and whether the database
/// answers a trivial round trip; never fails the request itself.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_healthy = inkpot_db::health_check(&state.pool).await.is_ok();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "db_healthy": db_healthy,
    }))
}
