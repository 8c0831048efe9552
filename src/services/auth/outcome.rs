/*
 * Responsibility
 * - 認証 1 回分の結果 (AuthOutcome) と、成功時に作る Identity の型
 * - claims は型付きフィールドから順序固定で導出する (自由な claims bag にはしない)
 */
use serde::Serialize;

pub const CLAIM_NAME_IDENTIFIER: &str = "nameidentifier";
pub const CLAIM_NAME: &str = "name";
pub const CLAIM_ROLE: &str = "role";

pub const CLAIM_VALUE_TYPE_STRING: &str = "string";

/// 1 回の認証試行の結果。必ずどれか 1 つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// この scheme の対象ではない (キーが無い)。後続の scheme に譲る。
    NoKeyProvided,
    Success(Identity),
    Failure(String),
}

impl AuthOutcome {
    pub fn is_no_key(&self) -> bool {
        matches!(self, Self::NoKeyProvided)
    }
}

/// 認証済み主体。リクエスト毎に生成され、リクエスト終了で捨てられる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub subject_name: String,
    pub role: String,
    pub issuer: String,
    pub scheme_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    pub claim_type: &'static str,
    pub value: String,
    pub value_type: &'static str,
    pub issuer: String,
}

impl Identity {
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// nameidentifier, name, role の順。
    pub fn claims(&self) -> Vec<Claim> {
        [
            (CLAIM_NAME_IDENTIFIER, &self.subject_name),
            (CLAIM_NAME, &self.subject_name),
            (CLAIM_ROLE, &self.role),
        ]
        .into_iter()
        .map(|(claim_type, value)| Claim {
            claim_type,
            value: value.clone(),
            value_type: CLAIM_VALUE_TYPE_STRING,
            issuer: self.issuer.clone(),
        })
        .collect()
    }
}
