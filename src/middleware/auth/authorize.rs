//! 認可フィルタ (route_layer で保護対象ルートにだけ掛ける)
//!
//! - 認証済み Identity が無ければ 401 (記録された失敗理由があればそれを message に)
//! - ロール指定がある場合、持っていなければ 403

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Extensions, Request},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::middleware::auth::AuthFailure;
use crate::services::auth::Identity;
use crate::state::AppState;

/// 認証済みであることを要求する。
pub fn require_authenticated(router: Router<AppState>) -> Router<AppState> {
    router.route_layer(middleware::from_fn(authenticated_middleware))
}

/// 指定ロールを要求する。未認証なら 401、ロール不足なら 403。
pub fn require_role(router: Router<AppState>, role: &'static str) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(role, role_middleware))
}

/// extensions から認証結果を取り出す。extractor からも使う。
pub fn identity_or_reject(extensions: &Extensions) -> Result<&Identity, AppError> {
    if let Some(identity) = extensions.get::<Identity>() {
        return Ok(identity);
    }

    match extensions.get::<AuthFailure>() {
        Some(failure) => Err(AppError::Unauthorized(failure.reason.clone())),
        None => Err(AppError::unauthorized()),
    }
}

async fn authenticated_middleware(req: Request<Body>, next: Next) -> Result<Response, AppError> {
    identity_or_reject(req.extensions())?;

    Ok(next.run(req).await)
}

async fn role_middleware(
    State(role): State<&'static str>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let identity = identity_or_reject(req.extensions())?;

    if !identity.has_role(role) {
        tracing::warn!(
            scheme = %identity.scheme_name,
            required = role,
            actual = %identity.role,
            "role requirement not met"
        );
        return Err(AppError::Forbidden);
    }

    Ok(next.run(req).await)
}
