use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    backend::{ComputeStrategy, RemoteBackend},
    config::ServiceConfig,
    error::ApiError,
    sim::{run_simulation, SimulationRequest},
    species::SpeciesCatalog,
};

pub struct AppState {
    pub catalog: SpeciesCatalog,
    pub strategy: ComputeStrategy,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/simulation/run", post(simulate))
        .route("/api/health", get(health))
        .with_state(state)
}

pub async fn run(config: ServiceConfig) -> Result<()> {
    let catalog = match &config.species_file {
        Some(path) => SpeciesCatalog::load(path)?,
        None => SpeciesCatalog::builtin(),
    };
    let strategy = match &config.backend_url {
        Some(url) => ComputeStrategy::Remote(RemoteBackend::new(url.clone())),
        None => ComputeStrategy::Local,
    };

    match &strategy {
        ComputeStrategy::Local => info!(species = catalog.len(), "computing simulations locally"),
        ComputeStrategy::Remote(backend) => {
            info!(backend = backend.base_url(), "relaying simulations")
        }
    }

    let state = Arc::new(AppState { catalog, strategy });
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;

    info!(%addr, "simulation service listening");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}

/// The raw body is taken as bytes so proxy mode can forward it exactly
/// as received; the local path parses from the same bytes.
async fn simulate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    match &state.strategy {
        ComputeStrategy::Remote(backend) => {
            let payload = backend.run_simulation(body).await?;
            Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
        }
        ComputeStrategy::Local => {
            let request: SimulationRequest = serde_json::from_slice(&body)
                .map_err(|err| ApiError::Validation(format!("invalid request body: {err}")))?;
            request.scenario.validate()?;
            let result = run_simulation(&request.scenario, &request.selected_species, &state.catalog);
            Ok(Json(result).into_response())
        }
    }
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "species": state.catalog.len() }))
}
