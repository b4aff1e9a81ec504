mod api;
mod dto;
mod state;

use crate::state::AppState;
use andante::prelude::*;
use axum::routing::{get, post};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing data path (a directory or zip holding the network tables)");
        std::process::exit(1);
    }
    let path = match std::path::Path::new(&args[1]).canonicalize() {
        Ok(path) => path,
        Err(err) => {
            error!("Invalid data path {}: {err}", args[1]);
            std::process::exit(1);
        }
    };
    let port = match std::env::var("ANDANTE_PORT") {
        Ok(value) => match value.parse() {
            Ok(port) => port,
            Err(err) => {
                error!("Invalid ANDANTE_PORT {value:?}: {err}");
                std::process::exit(1);
            }
        },
        Err(_) => DEFAULT_PORT,
    };

    info!("Loading routes...");
    let now = Instant::now();
    let source = if path.is_dir() {
        CsvSource::new(Config::default()).from_directory(path)
    } else {
        CsvSource::new(Config::default()).from_zip(path)
    };
    let matcher = match RouteMatcher::load(&source) {
        Ok(matcher) => matcher,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };
    info!(
        "Loading {} route directions took {:?}",
        matcher.directions().len(),
        now.elapsed()
    );
    let state = Arc::new(AppState::new(matcher, CachedZoneGraph::new(source)));

    let app = axum::Router::new()
        .route("/routes", get(api::routes))
        .route("/destinations", get(api::destinations))
        .route("/zones", get(api::zones))
        .route("/zones/allowed", get(api::allowed_zones))
        .route("/recommendation", post(api::recommendation))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {port}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {port}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
