/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: 起動時に組み立てた認証 pipeline (読み取り専用)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::AuthPipeline;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<AuthPipeline>,
}

impl AppState {
    pub fn new(auth: Arc<AuthPipeline>) -> Self {
        Self { auth }
    }
}
