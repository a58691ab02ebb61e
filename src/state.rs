/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - components: activity の component provider
 *   - auth: bearer token → Claims の verifier
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::{ServiceComponent, auth::ClaimsVerifier};

#[derive(Clone, Debug)]
pub struct AppState {
    pub components: ServiceComponent,
    pub auth: Arc<ClaimsVerifier>,
}

impl AppState {
    pub fn new(components: ServiceComponent, auth: Arc<ClaimsVerifier>) -> Self {
        Self { components, auth }
    }
}
