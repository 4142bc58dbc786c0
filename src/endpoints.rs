//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/partners/{partner_id}', use [format_endpoint].

/// The route for checking that the server is up.
pub const HEALTH: &str = "/health";
/// The route for getting the current user.
pub const ME: &str = "/api/me";
/// The route for starting the account linking flow.
pub const LINK_TOKEN: &str = "/api/plaid/create-link-token";
/// The route for exchanging a public token after linking.
pub const LINK_EXCHANGE: &str = "/api/plaid/exchange";
/// The route for syncing linked accounts.
pub const LINK_SYNC: &str = "/api/plaid/sync";
/// The route to access accounts.
pub const ACCOUNTS: &str = "/api/accounts";
/// The route to access transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route to access budgets.
pub const BUDGETS: &str = "/api/budgets";
/// The route to access savings goals.
pub const GOALS: &str = "/api/goals";
/// The route to access the household's partner links.
pub const PARTNERS: &str = "/api/partners";
/// The route to invite a partner to the household.
pub const INVITE_PARTNER: &str = "/api/partners/invite";
/// The route to accept a partner invite.
pub const ACCEPT_PARTNER: &str = "/api/partners/{partner_id}/accept";
/// The route to remove a partner link.
pub const PARTNER: &str = "/api/partners/{partner_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/partners/{partner_id}', '{partner_id}' is the parameter.
///
/// This function assumes that an endpoint path contains a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
