//! Savings goals with a target amount and date.

mod core;
mod create_endpoint;
mod list_endpoint;

pub use core::{Goal, GoalForm, INITIAL_GOAL_AMOUNT, create_goal, list_goals};
pub use create_endpoint::create_goal_endpoint;
pub use list_endpoint::list_goals_endpoint;
