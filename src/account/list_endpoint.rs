//! Defines the endpoint for listing accounts.

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{AppState, Error, account::Account, store::DataStore};

/// The state needed to list accounts.
#[derive(Debug, Clone)]
pub struct ListAccountsState {
    /// The store holding the accounts.
    pub store: DataStore,
}

impl FromRef<AppState> for ListAccountsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler that responds with every account as JSON.
pub async fn list_accounts_endpoint(
    State(state): State<ListAccountsState>,
) -> Result<Json<Vec<Account>>, Error> {
    super::list_accounts(&state.store).map(Json)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::{
        endpoints,
        test_utils::{seeded_state, test_server},
    };

    #[tokio::test]
    async fn lists_seeded_accounts() {
        let server = test_server(seeded_state());

        let response = server.get(endpoints::ACCOUNTS).await;

        response.assert_status_ok();
        let accounts = response.json::<Vec<Value>>();
        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[0]["id"], "acc-checking-1");
        assert_eq!(accounts[2]["type"], "brokerage");
    }
}
