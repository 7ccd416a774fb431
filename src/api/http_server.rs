// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use super::detect::detect_handler;
use super::handlers::{health_handler, home_handler, not_found_handler};
use super::ApiError;
use crate::config::DetectorConfig;
use crate::vision::{DetectionBackend, RoboflowClient};

/// Room for multipart boundaries and part headers on top of the image itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn DetectionBackend>,
    /// Largest accepted image, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(backend: Arc<dyn DetectionBackend>, max_upload_bytes: usize) -> Self {
        Self {
            backend,
            max_upload_bytes,
        }
    }

    pub fn from_config(config: &DetectorConfig) -> anyhow::Result<Self> {
        let client = RoboflowClient::from_config(config)?;
        Ok(Self::new(Arc::new(client), config.max_upload_bytes))
    }
}

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        // Upload page
        .route("/", get(home_handler))
        // Health check
        .route("/health", get(health_handler))
        // Detection endpoint
        .route("/detect", post(detect_handler))
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(config: DetectorConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    info!(
        "Using detection backend '{}' (max upload {} bytes)",
        state.backend.name(),
        state.max_upload_bytes
    );

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            // Without a signal handler the server just runs until killed
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

// Error response wrapper
pub struct ApiErrorResponse {
    pub error: ApiError,
    pub request_id: Option<String>,
}

impl ApiErrorResponse {
    pub fn new(error: ApiError, request_id: Option<String>) -> Self {
        Self { error, request_id }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        Self::new(error, None)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let error_response = self.error.to_response(self.request_id);

        (status, Json(error_response)).into_response()
    }
}
