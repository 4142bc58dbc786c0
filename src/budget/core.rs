//! Defines the budget model and its state operations.

use serde::{Deserialize, Serialize};

use crate::{Error, config::HouseholdContext, error::require, store::DataStore};

/// A spending limit for one category in one month.
///
/// Several budgets may exist for the same month and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// The ID of the budget.
    pub id: String,
    /// The household the budget belongs to.
    pub household_id: String,
    /// The month the budget applies to as `YYYY-MM`.
    pub month: String,
    /// The spending category the limit applies to.
    pub category: String,
    /// The spending limit as a fixed-point decimal string.
    pub limit_amount: String,
}

/// The data for creating a budget.
///
/// Missing fields deserialize as empty strings and are rejected by
/// [create_budget].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetForm {
    /// The month as `YYYY-MM`.
    pub month: String,
    /// The spending category.
    pub category: String,
    /// The spending limit.
    pub limit_amount: String,
}

/// Create a budget in the household of `household` and add it to `store`.
///
/// # Errors
/// Returns [Error::Validation] if any field of `form` is empty, or
/// [Error::LockPoisoned] if the store lock is poisoned. No ID is used up and
/// the store is unchanged on error.
pub fn create_budget(
    store: &DataStore,
    household: &HouseholdContext,
    form: BudgetForm,
) -> Result<Budget, Error> {
    require("month", &form.month)?;
    require("category", &form.category)?;
    require("limitAmount", &form.limit_amount)?;

    let budget = Budget {
        id: store.next_id(),
        household_id: household.household_id.clone(),
        month: form.month,
        category: form.category,
        limit_amount: form.limit_amount,
    };

    store.write(|collections| {
        collections.budgets.push(budget.clone());
        Ok(())
    })?;

    Ok(budget)
}

/// Get the budgets for `month` (`YYYY-MM`) in the order they were created.
///
/// # Errors
/// Returns [Error::LockPoisoned] if the store lock is poisoned.
pub fn list_budgets(store: &DataStore, month: &str) -> Result<Vec<Budget>, Error> {
    store.read(|collections| {
        collections
            .budgets
            .iter()
            .filter(|budget| budget.month == month)
            .cloned()
            .collect()
    })
}
