/*
 * Responsibility
 * - Component provider: one accessor per activity
 * - Handed to the ActivityRunner per invocation (Clone cheap: Arc inside), no global wiring
 */
use std::sync::Arc;

use crate::activities::{CreateGoalActivity, GetGoalDetailsActivity, GetGoalsActivity};
use crate::repos::GoalStore;

#[derive(Clone)]
pub struct ServiceComponent {
    goals: Arc<dyn GoalStore>,
}

impl std::fmt::Debug for ServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceComponent")
            .field("goals", &self.goals.backend_name())
            .finish()
    }
}

impl ServiceComponent {
    pub fn new(goals: Arc<dyn GoalStore>) -> Self {
        Self { goals }
    }

    pub fn provide_create_goal_activity(&self) -> CreateGoalActivity {
        CreateGoalActivity::new(self.goals.clone())
    }

    pub fn provide_get_goal_details_activity(&self) -> GetGoalDetailsActivity {
        GetGoalDetailsActivity::new(self.goals.clone())
    }

    pub fn provide_get_goals_activity(&self) -> GetGoalsActivity {
        GetGoalsActivity::new(self.goals.clone())
    }
}
