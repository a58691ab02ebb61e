use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    activities::model::GoalModel,
    pipeline::{Activity, ActivityError},
    repos::{GoalRow, GoalStore},
};

const MAX_GOAL_NAME_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateGoalRequest {
    pub user_id: String,
    pub goal_name: String,
    pub target: f64,
    pub unit: String,
    pub time_period: Option<String>,
}

impl CreateGoalRequest {
    pub fn validate(&self) -> Result<(), ActivityError> {
        if self.goal_name.trim().is_empty() {
            return Err(ActivityError::validation("goalName is required"));
        }
        if self.goal_name.chars().count() > MAX_GOAL_NAME_LEN {
            return Err(ActivityError::validation(format!(
                "goalName must be <= {MAX_GOAL_NAME_LEN} chars"
            )));
        }
        if !self.target.is_finite() || self.target <= 0.0 {
            return Err(ActivityError::validation("target must be a positive number"));
        }
        if self.unit.trim().is_empty() {
            return Err(ActivityError::validation("unit is required"));
        }
        if let Some(period) = &self.time_period
            && period.trim().is_empty()
        {
            return Err(ActivityError::validation("timePeriod cannot be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalResult {
    pub goal: GoalModel,
}

#[derive(Clone)]
pub struct CreateGoalActivity {
    store: Arc<dyn GoalStore>,
}

impl CreateGoalActivity {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Activity for CreateGoalActivity {
    type Request = CreateGoalRequest;
    type Result = CreateGoalResult;

    async fn handle_request(&self, request: CreateGoalRequest) -> Result<CreateGoalResult, ActivityError> {
        request.validate()?;

        let row = GoalRow {
            user_id: request.user_id,
            goal_name: request.goal_name.trim().to_string(),
            target: request.target,
            unit: request.unit.trim().to_string(),
            time_period: request.time_period.map(|p| p.trim().to_string()),
            created_at: Utc::now(),
        };

        if !self.store.insert(&row).await? {
            return Err(ActivityError::conflict(format!(
                "goal '{}' already exists",
                row.goal_name
            )));
        }

        tracing::info!(
            backend = self.store.backend_name(),
            goal_name = %row.goal_name,
            "goal created"
        );

        Ok(CreateGoalResult { goal: row.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pipeline::StatusCategory, repos::MemoryGoalStore};

    fn request(goal_name: &str, target: f64) -> CreateGoalRequest {
        CreateGoalRequest {
            user_id: "alice@example.com".into(),
            goal_name: goal_name.into(),
            target,
            unit: "KM".into(),
            time_period: Some("WEEKLY".into()),
        }
    }

    fn activity() -> CreateGoalActivity {
        CreateGoalActivity::new(Arc::new(MemoryGoalStore::new()))
    }

    #[tokio::test]
    async fn creates_goal_for_caller() {
        let result = activity()
            .handle_request(request("Run 5k", 5.0))
            .await
            .unwrap();

        assert_eq!(result.goal.user_id, "alice@example.com");
        assert_eq!(result.goal.goal_name, "Run 5k");
        assert_eq!(result.goal.time_period.as_deref(), Some("WEEKLY"));
    }

    #[tokio::test]
    async fn duplicate_name_is_a_client_error() {
        let activity = activity();
        activity.handle_request(request("Run 5k", 5.0)).await.unwrap();

        let err = activity
            .handle_request(request("Run 5k", 10.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::Conflict(_)));
        assert_eq!(err.category(), StatusCategory::ClientError);
    }

    #[tokio::test]
    async fn rejects_non_positive_target() {
        for target in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = activity()
                .handle_request(request("Run 5k", target))
                .await
                .unwrap_err();
            assert!(matches!(err, ActivityError::Validation(_)), "{target}");
        }
    }

    #[test]
    fn validate_rejects_blank_fields() {
        assert!(request("  ", 5.0).validate().is_err());
        assert!(request(&"x".repeat(MAX_GOAL_NAME_LEN + 1), 5.0).validate().is_err());

        let mut blank_unit = request("Run 5k", 5.0);
        blank_unit.unit = " ".into();
        assert!(blank_unit.validate().is_err());

        let mut blank_period = request("Run 5k", 5.0);
        blank_period.time_period = Some(String::new());
        assert!(blank_period.validate().is_err());

        let mut no_period = request("Run 5k", 5.0);
        no_period.time_period = None;
        assert!(no_period.validate().is_ok());
    }
}
