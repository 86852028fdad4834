use axum::{response::Json, routing::get, Router};
use serde_json::json;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Liveness only; the store is not touched.
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Listings API is healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
