/*
 * Responsibility
 * - Config読み込み → tracing 初期化 → 依存生成 → Router 組み立て
 * - Middleware の適用 (security headers / CORS / HTTP 共通)
 * - axum::serve() で起動
 */
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

use crate::{
    api,
    config::Config,
    middleware,
    repos::{GoalStore, MemoryGoalStore, PgGoalStore},
    services::{ServiceComponent, auth::build_claims_verifier},
    state::AppState,
};

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let goals = build_goal_store(&config).await?;
    let auth = build_claims_verifier(&config)?;
    let state = AppState::new(ServiceComponent::new(goals), auth);

    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, env = ?config.app_env, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn build_goal_store(config: &Config) -> Result<Arc<dyn GoalStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = PgPool::connect(url).await?;
            sqlx::migrate!().run(&pool).await?;
            Ok(Arc::new(PgGoalStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; goals are kept in memory");
            Ok(Arc::new(MemoryGoalStore::new()))
        }
    }
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router)
}
