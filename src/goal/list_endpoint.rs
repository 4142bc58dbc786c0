//! Defines the endpoint for listing savings goals.

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    goal::{Goal, list_goals},
    store::DataStore,
};

/// The state needed to list goals.
#[derive(Debug, Clone)]
pub struct ListGoalsState {
    /// The store holding the goals.
    pub store: DataStore,
}

impl FromRef<AppState> for ListGoalsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler that responds with every savings goal.
pub async fn list_goals_endpoint(
    State(state): State<ListGoalsState>,
) -> Result<Json<Vec<Goal>>, Error> {
    list_goals(&state.store).map(Json)
}
