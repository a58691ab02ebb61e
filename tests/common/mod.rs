#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use momentum::{
    app::build_router,
    config::Config,
    repos::MemoryGoalStore,
    services::{ServiceComponent, auth::build_claims_verifier},
    state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const ISSUER: &str = "https://auth.example.com";
pub const AUDIENCE: &str = "momentum";
pub const SECRET: &str = "integration-test-secret";

pub fn config() -> Config {
    Config::from_lookup(|key| match key {
        "AUTH_ISSUER" => Some(ISSUER.to_string()),
        "AUTH_AUDIENCE" => Some(AUDIENCE.to_string()),
        "AUTH_JWT_SECRET" => Some(SECRET.to_string()),
        _ => None,
    })
    .expect("test config should be valid")
}

pub fn app() -> Router {
    let config = config();
    let auth = build_claims_verifier(&config).expect("verifier should build");
    let state = AppState::new(
        ServiceComponent::new(Arc::new(MemoryGoalStore::new())),
        auth,
    );
    build_router(state, &config)
}

/// Signed token carrying `extra` on top of the registered claims.
pub fn token(extra: Value) -> String {
    let mut claims = json!({
        "iss": ISSUER,
        "aud": AUDIENCE,
        "exp": chrono::Utc::now().timestamp() + 600,
        "sub": "user-1",
    });
    if let (Some(claims), Some(extra)) = (claims.as_object_mut(), extra.as_object()) {
        claims.extend(extra.clone());
    }

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token should encode")
}

pub fn alice() -> String {
    token(json!({"email": "alice@example.com"}))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
    pub text: String,
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(Body::from(body.unwrap_or_default().to_string()))
        .expect("request build should succeed");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("app should handle request");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("response body should be readable");
    let text = String::from_utf8(bytes.to_vec()).expect("response body must be utf-8");
    let body = serde_json::from_str(&text).unwrap_or(Value::Null);

    TestResponse {
        status,
        headers,
        body,
        text,
    }
}
