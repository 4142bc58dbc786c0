//! Monthly spending limits per category.

mod core;
mod create_endpoint;
mod list_endpoint;

pub use core::{Budget, BudgetForm, create_budget, list_budgets};
pub use create_endpoint::create_budget_endpoint;
pub use list_endpoint::list_budgets_endpoint;
