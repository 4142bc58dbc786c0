#![allow(missing_docs)]

use axum_test::TestServer;
use time::{OffsetDateTime, macros::datetime};

use crate::{AppState, build_router, config::HouseholdContext, store::DataStore};

pub(crate) const TEST_TIMEZONE: &str = "Etc/UTC";
pub(crate) const TEST_ORIGIN: &str = "http://localhost:5173";

/// The instant the test data is seeded at.
pub(crate) fn test_now() -> OffsetDateTime {
    datetime!(2025-03-14 09:30 UTC)
}

/// App state with the demo data seeded at [test_now].
pub(crate) fn seeded_state() -> AppState {
    let household = HouseholdContext::default();
    let store = DataStore::seeded(test_now(), &household).expect("Could not seed data store.");

    AppState::new(store, household, TEST_TIMEZONE, TEST_ORIGIN)
}

/// App state with no records at all.
pub(crate) fn empty_state() -> AppState {
    AppState::new(
        DataStore::default(),
        HouseholdContext::default(),
        TEST_TIMEZONE,
        TEST_ORIGIN,
    )
}

pub(crate) fn test_server(state: AppState) -> TestServer {
    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}
