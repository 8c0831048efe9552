/*
 * Responsibility
 * - GET /api/v1/me の response DTO
 */
use serde::Serialize;

use crate::services::auth::{Claim, Identity};

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub name: String,
    pub role: String,
    pub issuer: String,
    pub scheme: String,
    pub claims: Vec<Claim>,
}

impl From<Identity> for MeResponse {
    fn from(identity: Identity) -> Self {
        let claims = identity.claims();

        Self {
            name: identity.subject_name,
            role: identity.role,
            issuer: identity.issuer,
            scheme: identity.scheme_name,
            claims,
        }
    }
}
