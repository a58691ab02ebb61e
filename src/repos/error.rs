/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - Unique-key collisions are reported as `Ok(false)` by the stores, not as errors
 * - Activity から見ると repo の失敗は全て unclassified (500, detail は log のみ)
 */
use thiserror::Error;

use crate::pipeline::ActivityError;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
}

impl From<RepoError> for ActivityError {
    fn from(e: RepoError) -> Self {
        ActivityError::Unexpected(anyhow::Error::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::StatusCategory;

    #[test]
    fn repo_errors_are_unclassified() {
        let err = ActivityError::from(RepoError::Db(sqlx::Error::PoolTimedOut));
        assert!(!err.is_classified());
        assert_eq!(err.category(), StatusCategory::ServerError);
    }
}
