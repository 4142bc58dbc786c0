//! Defines the endpoint for listing and totalling transactions.

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    extract::FirstValueQuery,
    store::DataStore,
    transaction::query::{TransactionFilter, TransactionPage, query_transactions},
};

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The store holding the transactions.
    pub store: DataStore,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler that responds with the transactions matching the query
/// parameters `from`, `to`, `accountId`, `category` and `q`, along with their
/// income and expense totals.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
    FirstValueQuery(filter): FirstValueQuery<TransactionFilter>,
) -> Result<Json<TransactionPage>, Error> {
    let filter = filter.normalised();
    tracing::debug!("Listing transactions with {filter:?}");

    query_transactions(&state.store, &filter).map(Json)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::{
        endpoints,
        test_utils::{seeded_state, test_server},
    };

    #[track_caller]
    fn assert_transaction_count(body: &Value, want: usize) {
        let got = body["transactions"]
            .as_array()
            .expect("transactions should be an array")
            .len();
        assert_eq!(got, want, "want {want} transactions, got {got}");
    }

    #[tokio::test]
    async fn lists_all_seeded_transactions_without_filters() {
        let server = test_server(seeded_state());

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_transaction_count(&body, 40);
        assert!(body["summary"]["income"].is_string());
        assert!(body["summary"]["expenses"].is_string());
    }

    #[tokio::test]
    async fn date_range_without_matches_returns_empty_page() {
        let server = test_server(seeded_state());

        let response = server
            .get(endpoints::TRANSACTIONS)
            .add_query_param("from", "2024-01-01")
            .add_query_param("to", "2024-01-01")
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["transactions"], Value::Array(vec![]));
        assert_eq!(body["summary"]["income"], "0.00");
        assert_eq!(body["summary"]["expenses"], "0.00");
    }

    #[tokio::test]
    async fn filters_by_account_id() {
        let server = test_server(seeded_state());

        let response = server
            .get(endpoints::TRANSACTIONS)
            .add_query_param("accountId", "acc-brokerage-1")
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_transaction_count(&body, 13);
        let transactions = body["transactions"].as_array().unwrap();
        assert!(
            transactions
                .iter()
                .all(|transaction| transaction["accountId"] == "acc-brokerage-1")
        );
    }

    #[tokio::test]
    async fn empty_parameters_do_not_filter() {
        let server = test_server(seeded_state());

        let response = server
            .get(endpoints::TRANSACTIONS)
            .add_query_param("category", "")
            .add_query_param("q", "")
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_transaction_count(&body, 40);
    }

    #[tokio::test]
    async fn repeated_parameter_uses_first_value() {
        let server = test_server(seeded_state());

        let response = server
            .get(&format!("{}?category=Food&category=Rent", endpoints::TRANSACTIONS))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let transactions = body["transactions"].as_array().unwrap();
        assert!(!transactions.is_empty());
        assert!(
            transactions
                .iter()
                .all(|transaction| transaction["category"] == "Food")
        );
    }
}
