//! Defines the endpoint for removing a partner link.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{
    Error,
    partner::{list_endpoint::PartnerState, remove_partner},
};

/// A route handler for removing a partner link, responds with `{"ok": true}`.
pub async fn delete_partner_endpoint(
    State(state): State<PartnerState>,
    Path(partner_id): Path<String>,
) -> Result<Json<Value>, Error> {
    let removed = remove_partner(&state.store, &partner_id)?;

    tracing::info!("Removed partner {} ({})", removed.id, removed.email);

    Ok(Json(json!({ "ok": true })))
}
