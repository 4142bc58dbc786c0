//! Defines the endpoint for inviting a partner to the household.

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::{
    Error,
    extract::JsonBody,
    partner::{PartnerLink, invite_partner, list_endpoint::PartnerState},
    timezone::local_now,
};

/// The request body for inviting a partner.
#[derive(Debug, Default, Deserialize)]
pub struct InviteForm {
    /// The email address to send the invite to.
    #[serde(default)]
    pub email: String,
}

/// A route handler for inviting a partner, responds with the new link.
///
/// Responds with 409 Conflict if the email address has already been invited.
pub async fn invite_partner_endpoint(
    State(state): State<PartnerState>,
    JsonBody(form): JsonBody<InviteForm>,
) -> Result<Json<PartnerLink>, Error> {
    let now = local_now(&state.local_timezone)?;

    let partner = invite_partner(&state.store, &state.household, &form.email, now)
        .inspect_err(|error| tracing::debug!("Rejected invite for {:?}: {error}", form.email))?;

    tracing::info!("Invited {} as partner {}", partner.email, partner.id);

    Ok(Json(partner))
}
