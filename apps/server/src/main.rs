// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pipeviz Server - visualization generation service for pipeline artifacts.
//!
//! This server accepts visualization requests, forwards them to the
//! external rendering service, and memoizes expensive renders in a
//! key-addressed artifact store. It supports:
//!
//! - Synchronous visualization generation with latency-gated caching
//! - Direct retrieval of cached artifacts
//!
//! # Endpoints
//!
//! - `GET /api/v1/health` - Health check
//! - `POST /api/v1/visualizations` - Generate (or serve cached) visualization
//! - `GET /api/v1/cache/*key` - Retrieve cached artifact

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod config;
mod error;
mod routes;
mod services;
mod types;

use config::Config;
use services::renderer::RendererClient;
use services::store::ArtifactStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ArtifactStore>,
    pub renderer: Arc<RendererClient>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,tower_http=debug,pipeviz_server=debug".into()),
        )
        .pretty()
        .init();

    let config = Config::from_env();

    tracing::info!(
        port = config.port,
        renderer_url = %config.renderer_url,
        cache_dir = %config.cache_dir,
        cache_write_threshold_ms = config.cache_write_threshold_ms,
        renderer_timeout_secs = config.renderer_timeout_secs,
        "Starting Pipeviz Server"
    );

    // Initialize artifact store
    let store = Arc::new(ArtifactStore::new(&config.cache_dir).await);

    // Initialize renderer client
    let renderer = Arc::new(RendererClient::new(
        &config.renderer_url,
        Duration::from_secs(config.renderer_timeout_secs),
    ));

    let state = AppState {
        store,
        renderer,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = Router::new()
        // Root endpoint - API information
        .route("/", get(routes::health::info))
        // Health check
        .route("/api/v1/health", get(routes::health::check))
        // Visualization generation
        .route("/api/v1/visualizations", post(routes::visualizations::create))
        // Cache retrieval
        .route("/api/v1/cache/*key", get(routes::cache::get_cached))
        // Middleware
        .layer(CompressionLayer::new()) // Compress responses (gzip)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
