/// Factory: build `ClaimsVerifier` from application `Config`.
use std::sync::Arc;

use anyhow::anyhow;

use crate::config::Config;
use crate::services::auth::ClaimsVerifier;

pub fn build_claims_verifier(config: &Config) -> anyhow::Result<Arc<ClaimsVerifier>> {
    let verifier = ClaimsVerifier::new(
        &config.auth_jwt_secret,
        &config.auth_issuer,
        &config.auth_audience,
        config.access_token_leeway_seconds,
    )
    .map_err(|e| anyhow!("invalid auth configuration: {e}"))?;

    Ok(Arc::new(verifier))
}
