/*
 * Responsibility
 * - API キー認証 (header → query の順でキーを取り出し、設定値と ordinal 比較)
 * - 成功時は固定 claims (role = "admin") の Identity を返す
 *
 * Notes
 * - 純粋関数。ログも状態も持たない (ログは middleware 側の責務)
 * - 比較は定数時間ではない。役割も常に "admin"。どちらも現状の契約として維持している
 */
use std::fmt;

use axum::http::HeaderName;
use thiserror::Error;

use super::outcome::{AuthOutcome, Identity};
use super::pipeline::AuthScheme;
use super::source::RequestKeySource;

pub const SCHEME_NAME: &str = "ApiKey";
pub const DEFAULT_KEY_NAME: &str = "X-Api-Key";
pub const DEFAULT_CLAIMS_ISSUER: &str = "ApiKeyValue";
pub const ADMIN_ROLE: &str = "admin";
pub const INVALID_KEY_MESSAGE: &str = "Invalid API Key provided.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiKeyOptionsError {
    #[error("api key value must not be empty")]
    EmptyKey,
    #[error("key parameter/header name must not be empty")]
    EmptyParameterName,
    #[error("key parameter/header name is not a valid header name: {0}")]
    InvalidParameterName(String),
}

/// 起動時に一度だけ作る、読み取り専用の設定。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyOptions {
    api_key_value: String,
    key_name: String,
    claims_issuer: Option<String>,
}

impl fmt::Debug for ApiKeyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // キー本体は出さない
        f.debug_struct("ApiKeyOptions")
            .field("key_name", &self.key_name)
            .field("claims_issuer", &self.claims_issuer)
            .finish_non_exhaustive()
    }
}

impl ApiKeyOptions {
    pub fn new(
        api_key_value: impl Into<String>,
        key_name: impl Into<String>,
        claims_issuer: Option<String>,
    ) -> Result<Self, ApiKeyOptionsError> {
        let api_key_value = api_key_value.into();
        let key_name = key_name.into();

        if api_key_value.is_empty() {
            return Err(ApiKeyOptionsError::EmptyKey);
        }
        if key_name.is_empty() {
            return Err(ApiKeyOptionsError::EmptyParameterName);
        }
        if HeaderName::from_bytes(key_name.as_bytes()).is_err() {
            return Err(ApiKeyOptionsError::InvalidParameterName(key_name));
        }

        Ok(Self {
            api_key_value,
            key_name,
            claims_issuer,
        })
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// 未設定なら `DEFAULT_CLAIMS_ISSUER`。
    pub fn claims_issuer(&self) -> &str {
        self.claims_issuer.as_deref().unwrap_or(DEFAULT_CLAIMS_ISSUER)
    }
}

/// `SCHEME_NAME` で登録された scheme として認証する。
pub fn authenticate(source: &RequestKeySource<'_>, options: &ApiKeyOptions) -> AuthOutcome {
    authenticate_as(SCHEME_NAME, source, options)
}

fn authenticate_as(
    scheme_name: &str,
    source: &RequestKeySource<'_>,
    options: &ApiKeyOptions,
) -> AuthOutcome {
    let candidate = source.candidate_key(&options.key_name);

    if candidate.is_empty() {
        return AuthOutcome::NoKeyProvided;
    }

    if candidate.as_ref() != options.api_key_value.as_bytes() {
        return AuthOutcome::Failure(INVALID_KEY_MESSAGE.to_string());
    }

    AuthOutcome::Success(Identity {
        subject_name: options.api_key_value.clone(),
        role: ADMIN_ROLE.to_string(),
        issuer: options.claims_issuer().to_string(),
        scheme_name: scheme_name.to_string(),
    })
}

/// pipeline に登録するための scheme 実装。
#[derive(Debug, Clone)]
pub struct ApiKeyAuthenticator {
    scheme_name: String,
    options: ApiKeyOptions,
}

impl ApiKeyAuthenticator {
    pub fn new(options: ApiKeyOptions) -> Self {
        Self::named(SCHEME_NAME, options)
    }

    pub fn named(scheme_name: impl Into<String>, options: ApiKeyOptions) -> Self {
        Self {
            scheme_name: scheme_name.into(),
            options,
        }
    }
}

impl AuthScheme for ApiKeyAuthenticator {
    fn name(&self) -> &str {
        &self.scheme_name
    }

    fn authenticate(&self, source: &RequestKeySource<'_>) -> AuthOutcome {
        authenticate_as(&self.scheme_name, source, &self.options)
    }
}
