/*
 * Responsibility
 * - goals テーブル向けの永続化インターフェース (GoalStore)
 * - Postgres 実装 (PgGoalStore); key is ("userId", "goalName")
 * - DB エラーは RepoError に変換して返す
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct GoalRow {
    #[sqlx(rename = "userId")]
    pub user_id: String,
    #[sqlx(rename = "goalName")]
    pub goal_name: String,
    pub target: f64,
    pub unit: String,
    #[sqlx(rename = "timePeriod")]
    pub time_period: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Goal persistence used by the activities.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait GoalStore: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Insert a new goal.
    //
    // Returns:
    // - `Ok(true)`  if the goal was stored
    // - `Ok(false)` if the user already has a goal with that name
    async fn insert(&self, goal: &GoalRow) -> Result<bool, RepoError>;

    async fn get(&self, user_id: &str, goal_name: &str) -> Result<Option<GoalRow>, RepoError>;

    // All goals of a user, ordered by name.
    async fn list(&self, user_id: &str) -> Result<Vec<GoalRow>, RepoError>;
}

#[derive(Clone, Debug)]
pub struct PgGoalStore {
    pool: PgPool,
}

impl PgGoalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalStore for PgGoalStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, goal: &GoalRow) -> Result<bool, RepoError> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO goals ("userId", "goalName", target, unit, "timePeriod", "createdAt")
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT ("userId", "goalName") DO NOTHING
            "#,
        )
        .bind(&goal.user_id)
        .bind(&goal.goal_name)
        .bind(goal.target)
        .bind(&goal.unit)
        .bind(goal.time_period.as_deref())
        .bind(goal.created_at)
        .execute(&self.pool)
        .await?;

        Ok(inserted.rows_affected() > 0)
    }

    async fn get(&self, user_id: &str, goal_name: &str) -> Result<Option<GoalRow>, RepoError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT "userId", "goalName", target, unit, "timePeriod", "createdAt"
            FROM goals
            WHERE "userId" = $1 AND "goalName" = $2
            "#,
        )
        .bind(user_id)
        .bind(goal_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<GoalRow>, RepoError> {
        let rows = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT "userId", "goalName", target, unit, "timePeriod", "createdAt"
            FROM goals
            WHERE "userId" = $1
            ORDER BY "goalName"
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
