use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::middleware::auth::authorize::identity_or_reject;
use crate::services::auth::Identity;
use crate::state::AppState;

/// Handler で、認証済み Identity を受け取るための extractor
/// authenticate middleware が Identity を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す (失敗理由が記録されていればそれを message に)
pub struct Principal(pub Identity);

impl FromRequestParts<AppState> for Principal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        identity_or_reject(&parts.extensions)
            .cloned()
            .map(Principal)
    }
}
