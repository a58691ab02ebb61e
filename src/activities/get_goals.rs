use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    activities::model::GoalModel,
    pipeline::{Activity, ActivityError},
    repos::GoalStore,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GetGoalsRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetGoalsResult {
    pub goals: Vec<GoalModel>,
}

#[derive(Clone)]
pub struct GetGoalsActivity {
    store: Arc<dyn GoalStore>,
}

impl GetGoalsActivity {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Activity for GetGoalsActivity {
    type Request = GetGoalsRequest;
    type Result = GetGoalsResult;

    async fn handle_request(&self, request: GetGoalsRequest) -> Result<GetGoalsResult, ActivityError> {
        let rows = self.store.list(&request.user_id).await?;
        Ok(GetGoalsResult {
            goals: rows.into_iter().map(GoalModel::from).collect(),
        })
    }
}
