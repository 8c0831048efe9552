/*
 * Responsibility
 * - GET /api/v1/me : 呼び出し元の Identity と claims を返す
 */
use axum::Json;

use crate::api::v1::{dto::me::MeResponse, extractors::Principal};

pub async fn me(Principal(identity): Principal) -> Json<MeResponse> {
    Json(MeResponse::from(identity))
}
