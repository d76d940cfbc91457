//! Villa API server
//!
//! A small REST API for managing villa records backed by an in-memory store.
//! Uses hexagonal (ports & adapters) architecture so the store can later be
//! swapped for a real persistence backend.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryVillaRepository;
use app::VillaService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub villa_service: Arc<VillaService<InMemoryVillaRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/villa",
            get(handlers::list_villas).post(handlers::create_villa),
        )
        .route(
            "/api/villa/:id",
            get(handlers::get_villa)
                .put(handlers::update_villa)
                .delete(handlers::delete_villa),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,villa_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Villa API...");

    let config = Config::from_env();

    // Seeded store, reset on every restart
    let villa_repo = Arc::new(InMemoryVillaRepository::seeded());
    let villa_service = Arc::new(VillaService::new(villa_repo));

    let state = AppState { villa_service };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, router(state))
        .await
        .expect("Server error");
}
