//! Defines the endpoint for listing the household's partner links.

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    config::HouseholdContext,
    partner::{PartnerLink, list_partners},
    store::DataStore,
};

/// The state needed to read and change partner links.
#[derive(Debug, Clone)]
pub struct PartnerState {
    /// The store holding the partner links.
    pub store: DataStore,
    /// The household that links are listed for and invited to.
    pub household: HouseholdContext,
    /// The local timezone as a canonical timezone name, used to timestamp
    /// invites and accepts.
    pub local_timezone: String,
}

impl FromRef<AppState> for PartnerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            household: state.household.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler that responds with the partner links of the household.
pub async fn list_partners_endpoint(
    State(state): State<PartnerState>,
) -> Result<Json<Vec<PartnerLink>>, Error> {
    list_partners(&state.store, &state.household).map(Json)
}
