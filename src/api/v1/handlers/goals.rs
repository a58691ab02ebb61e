/*
 * Responsibility
 * - /goals 系 handler
 * - 各 handler は pipeline の設定のみ: body decode → claims で authorize → activity 呼び出し
 * - The acting user is always the `email` claim
 */
use axum::extract::{Path, State, rejection::PathRejection};

use crate::{
    activities::{CreateGoalRequest, GetGoalDetailsRequest, GetGoalsRequest},
    api::v1::dto::goals::CreateGoalBody,
    error::AppError,
    pipeline::{Activity, ActivityRunner, AuthenticatedRequest, ResponseEnvelope},
    services::ServiceComponent,
    state::AppState,
};

const USER_ID_CLAIM: &str = "email";

pub async fn create_goal(
    State(state): State<AppState>,
    input: AuthenticatedRequest,
) -> ResponseEnvelope {
    ActivityRunner::new(state.components.clone())
        .run(
            || {
                let unauthenticated: CreateGoalBody = input.decode()?;
                input.authorize(|claims| {
                    Ok(CreateGoalRequest {
                        user_id: claims.require(USER_ID_CLAIM)?.to_string(),
                        goal_name: unauthenticated.goal_name,
                        target: unauthenticated.target,
                        unit: unauthenticated.unit,
                        time_period: unauthenticated.time_period,
                    })
                })
            },
            |request, components: ServiceComponent| async move {
                components
                    .provide_create_goal_activity()
                    .handle_request(request)
                    .await
            },
        )
        .await
}

pub async fn get_goal_details(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    input: AuthenticatedRequest,
) -> Result<ResponseEnvelope, AppError> {
    let Path(goal_name) =
        path.map_err(|rejection| AppError::bad_request("INVALID_PATH", rejection.body_text()))?;

    let envelope = ActivityRunner::new(state.components.clone())
        .run(
            || {
                input.authorize(|claims| {
                    Ok(GetGoalDetailsRequest {
                        user_id: claims.require(USER_ID_CLAIM)?.to_string(),
                        goal_name,
                    })
                })
            },
            |request, components: ServiceComponent| async move {
                components
                    .provide_get_goal_details_activity()
                    .handle_request(request)
                    .await
            },
        )
        .await;
    Ok(envelope)
}

pub async fn get_goals(
    State(state): State<AppState>,
    input: AuthenticatedRequest,
) -> ResponseEnvelope {
    ActivityRunner::new(state.components.clone())
        .run(
            || {
                input.authorize(|claims| {
                    Ok(GetGoalsRequest {
                        user_id: claims.require(USER_ID_CLAIM)?.to_string(),
                    })
                })
            },
            |request, components: ServiceComponent| async move {
                components
                    .provide_get_goals_activity()
                    .handle_request(request)
                    .await
            },
        )
        .await
}
