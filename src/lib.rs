//! Hearth is a demo backend for a household personal-finance app.
//!
//! This library provides a JSON REST API over an in-memory store that is
//! seeded with demo accounts, transactions, budgets, savings goals and
//! partner links when the server starts. Nothing is persisted.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

pub mod account;
mod app_state;
pub mod budget;
pub mod config;
pub mod endpoints;
mod error;
mod extract;
pub mod goal;
mod health;
mod link;
mod logging;
pub mod month;
pub mod partner;
mod routing;
pub mod seed;
pub mod store;
pub mod timezone;
pub mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::HouseholdContext;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, add_tracing_layer, logging_middleware};
pub use routing::build_router;
pub use store::DataStore;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
