//! Defines the savings goal model and its state operations.

use serde::{Deserialize, Serialize};

use crate::{Error, config::HouseholdContext, error::require, store::DataStore};

/// The amount saved towards a goal when it is created.
pub const INITIAL_GOAL_AMOUNT: &str = "0.00";

/// An amount the household is saving towards by a target date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// The ID of the goal.
    pub id: String,
    /// The household the goal belongs to.
    pub household_id: String,
    /// What the household is saving for, e.g. "Emergency Fund".
    pub name: String,
    /// The amount to save as a fixed-point decimal string.
    pub target_amount: String,
    /// The amount saved so far as a fixed-point decimal string.
    pub current_amount: String,
    /// When the goal should be reached.
    pub target_date: String,
}

/// The data for creating a savings goal.
///
/// Missing fields deserialize as empty strings and are rejected by
/// [create_goal].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoalForm {
    /// What the household is saving for.
    pub name: String,
    /// The amount to save.
    pub target_amount: String,
    /// When the goal should be reached.
    pub target_date: String,
}

/// Create a goal with nothing saved yet in the household of `household` and
/// add it to `store`.
///
/// # Errors
/// Returns [Error::Validation] if any field of `form` is empty, or
/// [Error::LockPoisoned] if the store lock is poisoned.
pub fn create_goal(
    store: &DataStore,
    household: &HouseholdContext,
    form: GoalForm,
) -> Result<Goal, Error> {
    require("name", &form.name)?;
    require("targetAmount", &form.target_amount)?;
    require("targetDate", &form.target_date)?;

    let goal = Goal {
        id: store.next_id(),
        household_id: household.household_id.clone(),
        name: form.name,
        target_amount: form.target_amount,
        current_amount: INITIAL_GOAL_AMOUNT.to_owned(),
        target_date: form.target_date,
    };

    store.write(|collections| {
        collections.goals.push(goal.clone());
        Ok(())
    })?;

    Ok(goal)
}

/// Get a copy of every goal.
///
/// # Errors
/// Returns [Error::LockPoisoned] if the store lock is poisoned.
pub fn list_goals(store: &DataStore) -> Result<Vec<Goal>, Error> {
    store.read(|collections| collections.goals.clone())
}
