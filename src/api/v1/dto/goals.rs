/*
 * Responsibility
 * - Goals の untrusted body DTO
 * - Identity fields (userId) are deliberately absent: they are taken from claims only
 */
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalBody {
    pub goal_name: String,
    pub target: f64,
    pub unit: String,
    #[serde(default)]
    pub time_period: Option<String>,
}
