//! Defines the endpoint for changing the category of a transaction.

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    extract::JsonBody,
    store::DataStore,
    transaction::{Transaction, update_category},
};

/// The state needed to update a transaction.
#[derive(Debug, Clone)]
pub struct UpdateTransactionState {
    /// The store holding the transactions.
    pub store: DataStore,
}

impl FromRef<AppState> for UpdateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The request body for changing a transaction's category.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryUpdate {
    /// The new category. Missing or empty clears the category.
    #[serde(default)]
    pub category: String,
}

/// A route handler for changing the category of a transaction, responds with
/// the updated transaction.
pub async fn update_category_endpoint(
    State(state): State<UpdateTransactionState>,
    Path(transaction_id): Path<String>,
    JsonBody(update): JsonBody<CategoryUpdate>,
) -> Result<Json<Transaction>, Error> {
    let transaction = update_category(&state.store, &transaction_id, &update.category)
        .inspect_err(|error| {
            tracing::debug!("Could not update category of transaction {transaction_id}: {error}")
        })?;

    tracing::info!(
        "Set category of transaction {transaction_id} to {:?}",
        update.category
    );

    Ok(Json(transaction))
}
