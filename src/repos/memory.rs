//! In-process goal store, used when no `DATABASE_URL` is configured and in tests.
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::repos::{
    error::RepoError,
    goal_repo::{GoalRow, GoalStore},
};

#[derive(Debug, Default)]
pub struct MemoryGoalStore {
    // (userId, goalName) → row; BTreeMap keeps per-user listing ordered by name.
    goals: RwLock<BTreeMap<(String, String), GoalRow>>,
}

impl MemoryGoalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GoalStore for MemoryGoalStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, goal: &GoalRow) -> Result<bool, RepoError> {
        let key = (goal.user_id.clone(), goal.goal_name.clone());
        let mut goals = self.goals.write().await;
        if goals.contains_key(&key) {
            return Ok(false);
        }
        goals.insert(key, goal.clone());
        Ok(true)
    }

    async fn get(&self, user_id: &str, goal_name: &str) -> Result<Option<GoalRow>, RepoError> {
        let goals = self.goals.read().await;
        Ok(goals
            .get(&(user_id.to_string(), goal_name.to_string()))
            .cloned())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<GoalRow>, RepoError> {
        let goals = self.goals.read().await;
        Ok(goals
            .iter()
            .filter(|((owner, _), _)| owner == user_id)
            .map(|(_, row)| row.clone())
            .collect())
    }
}
