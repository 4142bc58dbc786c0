//! Defines the endpoint for creating a budget.

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    budget::{Budget, BudgetForm, create_budget},
    config::HouseholdContext,
    extract::JsonBody,
    store::DataStore,
};

/// The state needed to create a budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetState {
    /// The store to add the budget to.
    pub store: DataStore,
    /// The household the budget is created in.
    pub household: HouseholdContext,
}

impl FromRef<AppState> for CreateBudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            household: state.household.clone(),
        }
    }
}

/// A route handler for creating a budget, responds with the created budget.
pub async fn create_budget_endpoint(
    State(state): State<CreateBudgetState>,
    JsonBody(form): JsonBody<BudgetForm>,
) -> Result<Json<Budget>, Error> {
    let budget = create_budget(&state.store, &state.household, form).inspect_err(|error| {
        tracing::debug!("Rejected budget: {error}");
    })?;

    tracing::info!(
        "Created budget {} for {} in {}",
        budget.id,
        budget.category,
        budget.month
    );

    Ok(Json(budget))
}
