/*
 * Responsibility
 * - GET /health (疎通用)
 * - 認可フィルタの外側 (キー無しで通る)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
