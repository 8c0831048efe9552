/*
 * Responsibility
 * - GET /api/v1/admin/ping : admin ロール専用の疎通確認
 */
use axum::Json;
use serde_json::{Value, json};

use crate::api::v1::extractors::Principal;

pub async fn ping(Principal(identity): Principal) -> Json<Value> {
    Json(json!({"status": "ok", "role": identity.role}))
}
