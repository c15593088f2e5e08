//! Health check handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// GET /health
///
/// Liveness plus a database round-trip. Always returns 200; `db_healthy`
/// reports the store's state.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = vitrine_db::health_check(&state.pool).await.is_ok();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "db_healthy": db_healthy,
    }))
}
