//! Identifiers of the household and user that requests act on behalf of.

/// The household that every request is scoped to, along with the user making
/// the requests.
///
/// There is no authentication, so these are fixed for the lifetime of the
/// server and injected at start-up rather than looked up per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseholdContext {
    /// The household that budgets, goals and partner links belong to.
    pub household_id: String,
    /// The user recorded as the inviter of partner links.
    pub user_id: String,
    /// The email address reported for the current user.
    pub user_email: String,
}

impl HouseholdContext {
    /// Create a context for `user_id` acting in `household_id`.
    pub fn new(household_id: &str, user_id: &str, user_email: &str) -> Self {
        Self {
            household_id: household_id.to_owned(),
            user_id: user_id.to_owned(),
            user_email: user_email.to_owned(),
        }
    }
}

impl Default for HouseholdContext {
    fn default() -> Self {
        Self::new("household-1", "user-1", "demo@example.com")
    }
}
