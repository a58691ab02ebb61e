/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は認証なし、/goals は claims middleware の内側
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    goals::{create_goal, get_goal_details, get_goals},
    health::health,
};

pub fn routes(state: AppState) -> Router<AppState> {
    let goals = Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/{goal_name}", get(get_goal_details));

    Router::new()
        .route("/health", get(health))
        .merge(middleware::auth::claims::apply(goals, state))
}
