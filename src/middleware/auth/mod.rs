/*
 * Responsibility
 * - authenticate: 全リクエストで認証 pipeline を走らせ、結果を extensions に載せる
 * - authorize: 保護対象ルートで認証済み/ロールを要求する (401/403)
 */
pub mod authenticate;
pub mod authorize;

pub use authenticate::AuthFailure;
