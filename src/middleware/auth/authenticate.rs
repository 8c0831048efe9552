//! 認証 pipeline を実行し、結果を request extensions に入れる
//!
//! - Success → `Identity` を insert (extractor/authorize が参照する)
//! - Failure → `AuthFailure` を insert (拒否するかどうかは authorize 側が決める)
//! - NoKeyProvided → 何も入れない (匿名のまま通す)
//!
//! ここではリクエストを拒否しない。公開ルートは失敗したキーが付いていても通る。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::services::auth::{AuthOutcome, RequestKeySource};
use crate::state::AppState;

/// 認証に失敗した試行。理由は 401 の message にそのまま使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFailure {
    pub scheme: String,
    pub reason: String,
}

/// Router 全体に認証 middleware を適用する。
///
/// ```ignore
/// let app = Router::new().nest("/api/v1", v1);
/// let app = middleware::auth::authenticate::apply(app, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, authenticate_middleware))
}

async fn authenticate_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let (scheme, outcome) = {
        let source = RequestKeySource::new(req.headers(), req.uri().query());
        let (scheme, outcome) = state.auth.run(&source);
        (scheme.map(str::to_owned), outcome)
    };
    let scheme = scheme.unwrap_or_default();

    match outcome {
        AuthOutcome::Success(identity) => {
            tracing::debug!(scheme = %scheme, role = %identity.role, "request authenticated");
            req.extensions_mut().insert(identity);
        }
        AuthOutcome::Failure(reason) => {
            tracing::info!(scheme = %scheme, reason = %reason, "request was not authenticated");
            req.extensions_mut().insert(AuthFailure { scheme, reason });
        }
        AuthOutcome::NoKeyProvided => {
            tracing::debug!(schemes = ?state.auth.scheme_names(), "no credentials presented");
        }
    }

    next.run(req).await
}
