pub mod error;
pub mod goal_repo;
pub mod memory;

pub use goal_repo::{GoalRow, GoalStore, PgGoalStore};
pub use memory::MemoryGoalStore;
