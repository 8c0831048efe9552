/*!
 * Authenticated principal extractor
 *
 * Responsibility:
 * - 認証済みリクエストの Identity を handler に提供する
 * - 型 (Identity) は services::auth 側、axum 依存はこの extractor に閉じ込める
 */

mod core;

pub use self::core::Principal;
