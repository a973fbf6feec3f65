use axum::Json;
use serde_json::{json, Value};

/// GET /api/health - liveness only, no dependency checks
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "API is healthy" }))
}
