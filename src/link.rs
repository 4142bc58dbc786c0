//! Stand-ins for the account linking provider's endpoints.
//!
//! Linking is not implemented: the accounts are already seeded, so these
//! acknowledge the request without touching any state.

use axum::Json;
use serde_json::{Map, Value, json};

use crate::extract::JsonBody;

/// The link token handed to the client to start the linking flow.
pub const DEMO_LINK_TOKEN: &str = "demo-link-token";

/// A route handler that responds with a fixed link token.
pub async fn create_link_token_endpoint() -> Json<Value> {
    Json(json!({ "link_token": DEMO_LINK_TOKEN }))
}

/// A route handler that accepts any JSON object as the token exchange.
pub async fn exchange_endpoint(JsonBody(body): JsonBody<Map<String, Value>>) -> Json<Value> {
    tracing::debug!("Ignoring token exchange with fields {:?}", body.keys());

    Json(json!({ "ok": true }))
}

/// A route handler that acknowledges a sync request.
pub async fn sync_endpoint() -> Json<Value> {
    Json(json!({ "ok": true }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{
        endpoints,
        test_utils::{seeded_state, test_server},
    };

    #[tokio::test]
    async fn create_link_token_returns_demo_token() {
        let server = test_server(seeded_state());

        let response = server.post(endpoints::LINK_TOKEN).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "link_token": "demo-link-token" })
        );
    }

    #[tokio::test]
    async fn exchange_accepts_json_object() {
        let server = test_server(seeded_state());

        let response = server
            .post(endpoints::LINK_EXCHANGE)
            .json(&json!({ "public_token": "public-sandbox-123" }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "ok": true }));
    }

    #[tokio::test]
    async fn exchange_rejects_non_json_body() {
        let server = test_server(seeded_state());

        let response = server.post(endpoints::LINK_EXCHANGE).text("not json").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn sync_does_not_change_accounts() {
        let server = test_server(seeded_state());
        let before = server.get(endpoints::ACCOUNTS).await.json::<Value>();

        server.get(endpoints::LINK_SYNC).await.assert_status_ok();

        assert_eq!(server.get(endpoints::ACCOUNTS).await.json::<Value>(), before);
    }
}
