//! Unauthenticated liveness endpoints.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// `GET /` — fixed welcome payload.
pub async fn welcome() -> Json<Value> {
    Json(json!({"message": "Welcome to the Math API"}))
}

/// `GET /api/health` — liveness probe.
///
/// Returns status, uptime and version, suitable for load-balancer health
/// checks.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let uptime = state.start_time.elapsed().as_secs();

    Json(json!({
        "status": "ok",
        "uptime_secs": uptime,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
