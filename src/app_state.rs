//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{config::HouseholdContext, store::DataStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory store shared by every request.
    pub store: DataStore,

    /// The household and user that requests act on behalf of.
    pub household: HouseholdContext,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The origin that browsers may make credentialed requests from.
    pub allowed_origin: String,
}

impl AppState {
    /// Create a new [AppState] serving `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(
        store: DataStore,
        household: HouseholdContext,
        local_timezone: &str,
        allowed_origin: &str,
    ) -> Self {
        Self {
            store,
            household,
            local_timezone: local_timezone.to_owned(),
            allowed_origin: allowed_origin.to_owned(),
        }
    }
}

impl FromRef<AppState> for HouseholdContext {
    fn from_ref(state: &AppState) -> Self {
        state.household.clone()
    }
}
