/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::claims は platform の認証ステップ (token → Claims)
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
