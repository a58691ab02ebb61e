use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    activities::model::GoalModel,
    pipeline::{Activity, ActivityError},
    repos::GoalStore,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GetGoalDetailsRequest {
    pub user_id: String,
    pub goal_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetGoalDetailsResult {
    pub goal: GoalModel,
}

#[derive(Clone)]
pub struct GetGoalDetailsActivity {
    store: Arc<dyn GoalStore>,
}

impl GetGoalDetailsActivity {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Activity for GetGoalDetailsActivity {
    type Request = GetGoalDetailsRequest;
    type Result = GetGoalDetailsResult;

    async fn handle_request(
        &self,
        request: GetGoalDetailsRequest,
    ) -> Result<GetGoalDetailsResult, ActivityError> {
        if request.goal_name.trim().is_empty() {
            return Err(ActivityError::validation("goalName is required"));
        }

        let row = self
            .store
            .get(&request.user_id, request.goal_name.trim())
            .await?
            .ok_or_else(|| {
                ActivityError::not_found(format!("goal '{}' not found", request.goal_name))
            })?;

        Ok(GetGoalDetailsResult { goal: row.into() })
    }
}
