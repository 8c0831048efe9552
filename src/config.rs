/*
 * Responsibility
 * - 環境変数 (.env 含む) から設定を読み込む (API キー、ヘッダ名、issuer、CORS など)
 * - 設定値のバリデーション (不足・不正なら起動失敗)
 * - 起動後の再読み込みはしない
 */
use std::net::SocketAddr;

use thiserror::Error;

use crate::services::auth::{ApiKeyOptions, ApiKeyOptionsError, DEFAULT_KEY_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("invalid api key configuration: {0}")]
    ApiKey(#[from] ApiKeyOptionsError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub request_body_limit_bytes: usize,
    pub request_timeout_seconds: u64,

    pub api_key: ApiKeyOptions,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup` は環境変数名 → 値。テストでは HashMap などを渡す。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match lookup("PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let request_body_limit_bytes: usize = match lookup("REQUEST_BODY_LIMIT_BYTES") {
            Some(s) => s
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"))?,
            None => 1024 * 1024,
        };

        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(s) => s
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => 30,
        };

        let api_key_value = lookup("API_KEY_VALUE")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("API_KEY_VALUE"))?;

        let key_name = lookup("API_KEY_PARAMETER_NAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_KEY_NAME.to_string());

        // 空文字は未設定扱い
        let claims_issuer = lookup("API_KEY_CLAIMS_ISSUER").filter(|v| !v.trim().is_empty());

        let api_key = ApiKeyOptions::new(api_key_value, key_name, claims_issuer)?;

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            request_body_limit_bytes,
            request_timeout_seconds,
            api_key,
        })
    }
}
