// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::Uri,
    response::{Html, Json},
};
use serde::{Deserialize, Serialize};

use super::http_server::ApiErrorResponse;
use super::ApiError;
use crate::version;

const INDEX_HTML: &str = include_str!("static/index.html");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET / - Upload page
pub async fn home_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health - Liveness probe
///
/// Does not contact the inference provider.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION_NUMBER.to_string(),
    })
}

pub async fn not_found_handler(uri: Uri) -> ApiErrorResponse {
    ApiError::NotFound(format!("No route for {}", uri.path())).into()
}
