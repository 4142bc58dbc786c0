//! Defines the endpoint for creating a savings goal.

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    config::HouseholdContext,
    extract::JsonBody,
    goal::{Goal, GoalForm, create_goal},
    store::DataStore,
};

/// The state needed to create a goal.
#[derive(Debug, Clone)]
pub struct CreateGoalState {
    /// The store to add the goal to.
    pub store: DataStore,
    /// The household the goal is created in.
    pub household: HouseholdContext,
}

impl FromRef<AppState> for CreateGoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            household: state.household.clone(),
        }
    }
}

/// A route handler for creating a savings goal, responds with the created goal.
pub async fn create_goal_endpoint(
    State(state): State<CreateGoalState>,
    JsonBody(form): JsonBody<GoalForm>,
) -> Result<Json<Goal>, Error> {
    let goal = create_goal(&state.store, &state.household, form)
        .inspect_err(|error| tracing::debug!("Rejected goal: {error}"))?;

    tracing::info!("Created goal {} \"{}\"", goal.id, goal.name);

    Ok(Json(goal))
}
