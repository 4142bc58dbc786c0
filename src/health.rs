//! Liveness check and the current user.

use axum::{Json, extract::State};
use serde_json::{Value, json};
use time::OffsetDateTime;

use crate::config::HouseholdContext;

/// A route handler that reports the server is up along with the server time
/// in Unix milliseconds.
pub async fn health_endpoint() -> Json<Value> {
    let timestamp_millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

    Json(json!({ "ok": true, "ts": timestamp_millis as i64 }))
}

/// A route handler that responds with the user requests are made as.
pub async fn me_endpoint(State(household): State<HouseholdContext>) -> Json<Value> {
    Json(json!({
        "id": household.user_id,
        "email": household.user_email,
        "householdId": household.household_id,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{
        endpoints,
        test_utils::{seeded_state, test_server},
    };

    #[tokio::test]
    async fn health_reports_ok() {
        let server = test_server(seeded_state());

        let response = server.get(endpoints::HEALTH).await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["ok"], true);
        assert!(body["ts"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn me_reports_household_context() {
        let server = test_server(seeded_state());

        let response = server.get(endpoints::ME).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "id": "user-1",
                "email": "demo@example.com",
                "householdId": "household-1",
            })
        );
    }
}
