/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - 認可フィルタ (認証必須 / ロール必須) は route_layer でここで掛ける
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{admin, me};
use crate::middleware::auth::authorize;
use crate::services::auth::ADMIN_ROLE;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let authenticated = authorize::require_authenticated(Router::new().route("/me", get(me::me)));

    let admin = authorize::require_role(
        Router::new().route("/admin/ping", get(admin::ping)),
        ADMIN_ROLE,
    );

    authenticated.merge(admin)
}
