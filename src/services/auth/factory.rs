/// Factory: build the `AuthPipeline` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{ApiKeyAuthenticator, AuthPipeline};

pub fn build_auth_pipeline(config: &Config) -> Arc<AuthPipeline> {
    let pipeline = AuthPipeline::new().with_scheme(ApiKeyAuthenticator::new(config.api_key.clone()));

    tracing::debug!(schemes = ?pipeline.scheme_names(), "authentication pipeline built");

    Arc::new(pipeline)
}
