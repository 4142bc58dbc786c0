//! Defines the endpoint for listing the budgets of a month.

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    budget::{Budget, list_budgets},
    extract::FirstValueQuery,
    month::current_month,
    store::DataStore,
    timezone::local_now,
};

/// The state needed to list budgets.
#[derive(Debug, Clone)]
pub struct ListBudgetsState {
    /// The store holding the budgets.
    pub store: DataStore,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for ListBudgetsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query parameters for listing budgets.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetsQuery {
    /// The month as `YYYY-MM`. Defaults to the current month.
    pub month: Option<String>,
}

/// The budgets of one month.
#[derive(Debug, Serialize)]
pub struct BudgetsResponse {
    /// The month that was listed.
    pub month: String,
    /// The budgets for `month`.
    pub budgets: Vec<Budget>,
}

/// A route handler that responds with the budgets for the month in the query
/// string, or the current month in the local timezone.
pub async fn list_budgets_endpoint(
    State(state): State<ListBudgetsState>,
    FirstValueQuery(query): FirstValueQuery<BudgetsQuery>,
) -> Result<Json<BudgetsResponse>, Error> {
    let month = match query.month.filter(|month| !month.is_empty()) {
        Some(month) => month,
        None => current_month(local_now(&state.local_timezone)?),
    };

    let budgets = list_budgets(&state.store, &month)?;

    Ok(Json(BudgetsResponse { month, budgets }))
}
