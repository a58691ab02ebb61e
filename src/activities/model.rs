use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::GoalRow;

/// Goal as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalModel {
    pub user_id: String,
    pub goal_name: String,
    pub target: f64,
    pub unit: String,
    pub time_period: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<GoalRow> for GoalModel {
    fn from(row: GoalRow) -> Self {
        Self {
            user_id: row.user_id,
            goal_name: row.goal_name,
            target: row.target,
            unit: row.unit,
            time_period: row.time_period,
            created_at: row.created_at,
        }
    }
}
