use std::{net::SocketAddr, process::ExitCode};

use axum::{http::HeaderValue, middleware};
use axum_server::Handle;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hearth_rs::{
    AppState, DataStore, HouseholdContext, add_tracing_layer, build_router, graceful_shutdown,
    logging_middleware, timezone::local_now,
};

/// The REST API server for hearth_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the API from.
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// The address to listen on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// The origin that browsers may make credentialed requests from.
    #[arg(long, env = "ALLOWED_ORIGIN", default_value = "http://localhost:5173")]
    allowed_origin: String,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    #[arg(long, env = "TIMEZONE", default_value = "Etc/UTC")]
    timezone: String,

    /// The household that requests act on.
    #[arg(long, default_value = "household-1")]
    household_id: String,

    /// The user that requests are made as.
    #[arg(long, default_value = "user-1")]
    user_id: String,

    /// The email address of the user that requests are made as.
    #[arg(long, default_value = "demo@example.com")]
    user_email: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let addr: SocketAddr = match format!("{}:{}", args.host, args.port).parse() {
        Ok(addr) => addr,
        Err(error) => {
            tracing::error!("Invalid listen address {}:{}: {error}", args.host, args.port);
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = args.allowed_origin.parse::<HeaderValue>() {
        tracing::error!("Invalid allowed origin \"{}\": {error}", args.allowed_origin);
        return ExitCode::FAILURE;
    }

    let now = match local_now(&args.timezone) {
        Ok(now) => now,
        Err(error) => {
            tracing::error!("Could not get the local time: {error}");
            return ExitCode::FAILURE;
        }
    };

    let household = HouseholdContext::new(&args.household_id, &args.user_id, &args.user_email);
    let store = match DataStore::seeded(now, &household) {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Could not seed the data store: {error}");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(store, household, &args.timezone, &args.allowed_origin);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped unexpectedly: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
