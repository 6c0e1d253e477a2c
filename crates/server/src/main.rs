mod api;
mod backend;
mod config;
mod dto;
mod state;

use crate::{config::Config, state::AppState};
use axum::routing::get;
use modeshare::{choice::initial_actions, prelude::*};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };
    let date_range = match DateRange::new(config.date_bounds) {
        Ok(date_range) => date_range,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(config.graphql_url, date_range));
    tokio::spawn(load_options(state.clone()));

    let app = axum::Router::new()
        .route("/options", get(api::options))
        .route("/choices", get(api::choices).post(api::dispatch))
        .route("/data", get(api::data))
        .route("/share", get(api::share))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}

/// Loads the option lists once and fills in the choices still unset.
async fn load_options(state: Arc<AppState>) {
    info!("Loading option lists...");
    let now = Instant::now();
    let options = match backend::fetch_options(&state.client, &state.graphql_url).await {
        Ok(options) => options,
        Err(err) => {
            error!("Failed to load option lists: {err}");
            return;
        }
    };
    info!(
        "Loaded {} area types and {} transport modes in {:?}",
        options.area_types.len(),
        options.transport_modes.len(),
        now.elapsed()
    );

    {
        let mut controller = state.controller.lock().await;
        let actions = initial_actions(controller.state(), &options, &state.defaults);
        controller.dispatch_all(actions);
    }
    state.options.write().await.replace(options);
}
