//! Defines the endpoint for accepting a partner invite.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    partner::{PartnerLink, accept_invite, list_endpoint::PartnerState},
    timezone::local_now,
};

/// A route handler for accepting a partner invite, responds with the updated link.
pub async fn accept_invite_endpoint(
    State(state): State<PartnerState>,
    Path(partner_id): Path<String>,
) -> Result<Json<PartnerLink>, Error> {
    let now = local_now(&state.local_timezone)?;

    let partner = accept_invite(&state.store, &partner_id, now)?;

    tracing::info!("Partner {} ({}) accepted", partner.id, partner.email);

    Ok(Json(partner))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{
        endpoints::{self, format_endpoint},
        test_utils::{seeded_state, test_server},
    };

    #[tokio::test]
    async fn accepting_invite_activates_partner() {
        let server = test_server(seeded_state());

        let response = server
            .post(&format_endpoint(endpoints::ACCEPT_PARTNER, "partner-2"))
            .await;

        response.assert_status_ok();
        let partner = response.json::<Value>();
        assert_eq!(partner["status"], "active");
        assert!(partner["acceptedAt"].is_string());
    }

    #[tokio::test]
    async fn accepting_active_partner_succeeds() {
        let server = test_server(seeded_state());
        let seeded_accepted_at = server.get(endpoints::PARTNERS).await.json::<Vec<Value>>()[0]
            ["acceptedAt"]
            .clone();

        let response = server
            .post(&format_endpoint(endpoints::ACCEPT_PARTNER, "partner-1"))
            .await;

        response.assert_status_ok();
        let partner = response.json::<Value>();
        assert_eq!(partner["status"], "active");
        assert_ne!(partner["acceptedAt"], seeded_accepted_at);
    }

    #[tokio::test]
    async fn unknown_partner_is_not_found() {
        let server = test_server(seeded_state());

        let response = server
            .post(&format_endpoint(endpoints::ACCEPT_PARTNER, "partner-99"))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Partner not found" })
        );
    }
}
