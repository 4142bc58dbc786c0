//! Application router configuration.

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{delete, get, patch, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{
    AppState, Error,
    account::list_accounts_endpoint,
    budget::{create_budget_endpoint, list_budgets_endpoint},
    endpoints,
    goal::{create_goal_endpoint, list_goals_endpoint},
    health::{health_endpoint, me_endpoint},
    link::{create_link_token_endpoint, exchange_endpoint, sync_endpoint},
    partner::{
        accept_invite_endpoint, delete_partner_endpoint, invite_partner_endpoint,
        list_partners_endpoint,
    },
    transaction::{list_transactions_endpoint, update_category_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.allowed_origin);

    Router::new()
        .route(endpoints::HEALTH, get(health_endpoint))
        .route(endpoints::ME, get(me_endpoint))
        .route(endpoints::LINK_TOKEN, post(create_link_token_endpoint))
        .route(endpoints::LINK_EXCHANGE, post(exchange_endpoint))
        .route(endpoints::LINK_SYNC, get(sync_endpoint))
        .route(endpoints::ACCOUNTS, get(list_accounts_endpoint))
        .route(endpoints::TRANSACTIONS, get(list_transactions_endpoint))
        .route(endpoints::TRANSACTION, patch(update_category_endpoint))
        .route(
            endpoints::BUDGETS,
            get(list_budgets_endpoint).post(create_budget_endpoint),
        )
        .route(
            endpoints::GOALS,
            get(list_goals_endpoint).post(create_goal_endpoint),
        )
        .route(endpoints::PARTNERS, get(list_partners_endpoint))
        .route(endpoints::INVITE_PARTNER, post(invite_partner_endpoint))
        .route(endpoints::ACCEPT_PARTNER, post(accept_invite_endpoint))
        .route(endpoints::PARTNER, delete(delete_partner_endpoint))
        .fallback(get_404_not_found)
        .layer(cors)
        .with_state(state)
}

/// Allow credentialed requests from `allowed_origin` only.
///
/// An origin that is not a valid header value matches no requests.
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let origin = match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => Some(origin),
        Err(error) => {
            tracing::warn!("Ignoring invalid allowed origin \"{allowed_origin}\": {error}");
            None
        }
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origin))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};

    use crate::{
        endpoints,
        test_utils::{TEST_ORIGIN, seeded_state, test_server},
    };

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let server = test_server(seeded_state());

        let response = server.get("/api/does-not-exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>(), json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let server = test_server(seeded_state());

        let response = server.delete(endpoints::ACCOUNTS).await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn allowed_origin_gets_cors_headers() {
        let server = test_server(seeded_state());

        let response = server
            .get(endpoints::ACCOUNTS)
            .add_header("Origin", TEST_ORIGIN)
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), TEST_ORIGIN);
        assert_eq!(response.header("access-control-allow-credentials"), "true");
    }

    #[tokio::test]
    async fn other_origins_get_no_cors_headers() {
        let server = test_server(seeded_state());

        let response = server
            .get(endpoints::ACCOUNTS)
            .add_header("Origin", "http://evil.example.com")
            .await;

        response.assert_status_ok();
        assert!(
            response
                .headers()
                .get("access-control-allow-origin")
                .is_none()
        );
    }

    #[tokio::test]
    async fn preflight_is_answered() {
        let server = test_server(seeded_state());

        let response = server
            .method(Method::OPTIONS, endpoints::TRANSACTIONS)
            .add_header("Origin", TEST_ORIGIN)
            .add_header("Access-Control-Request-Method", "PATCH")
            .add_header("Access-Control-Request-Headers", "content-type")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), TEST_ORIGIN);
        let methods = response.header("access-control-allow-methods");
        assert!(methods.to_str().unwrap().contains("PATCH"));
    }
}
