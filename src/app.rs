/*
 * Responsibility
 * - tracing 初期化 → Config 読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (認証 / CORS / request-id / limit / timeout)
 * - axum::serve() で起動
 */
use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::Config,
    error::AppError,
    middleware,
    services::auth::build_auth_pipeline,
    state::AppState,
};

fn init_tracing() {
    // RUST_LOG があればそれを優先
    // ex: RUST_LOG=info,api_key_auth=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    tracing::info!(
        env = ?config.app_env,
        addr = %config.addr,
        key_name = config.api_key.key_name(),
        "starting API"
    );

    let state = AppState::new(build_auth_pipeline(&config));
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .route("/health", get(api::health::health))
        .nest("/api/v1", api::v1::routes());

    // OpenAPI は開発環境のみ公開
    if !config.app_env.is_production() {
        router = router.merge(api::docs::routes(&config.api_key));
    }

    let router = router.fallback(|| async { AppError::NotFound });
    let router = middleware::auth::authenticate::apply(router, state.clone()).with_state(state);

    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config)
}
