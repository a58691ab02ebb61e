/*
 * Responsibility
 * - Goal activities (Activity 実装) と、その request/result 型
 * - Requests are built only through the pipeline, so `user_id` always comes from claims
 */
pub mod create_goal;
pub mod get_goal_details;
pub mod get_goals;
pub mod model;

pub use create_goal::{CreateGoalActivity, CreateGoalRequest, CreateGoalResult};
pub use get_goal_details::{GetGoalDetailsActivity, GetGoalDetailsRequest, GetGoalDetailsResult};
pub use get_goals::{GetGoalsActivity, GetGoalsRequest, GetGoalsResult};
pub use model::GoalModel;
