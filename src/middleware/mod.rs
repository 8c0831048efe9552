/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth (認証/認可), cors, http (request-id / limit / timeout / trace)
 */
pub mod auth;
pub mod cors;
pub mod http;
