// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::{multipart::MultipartError, Multipart};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::response::DetectResponse;
use crate::api::http_server::{ApiErrorResponse, AppState};
use crate::api::ApiError;
use crate::detection::normalize;
use crate::vision::ImageUpload;

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";

/// POST /detect - Detect road signs in an uploaded image
///
/// # Request
/// `multipart/form-data` with the image in field `file`. Other fields are ignored.
///
/// # Response
/// - `message`: "Detection successful"
/// - `detections`: Normalized detections
/// - `descriptions`: Sign description per detection
/// - `raw`: Provider payload as received
/// - `processingTimeMs`, `requestId`
///
/// # Errors
/// - 400 Bad Request: missing `file` field, empty file or malformed multipart body
/// - 413 Payload Too Large: image over the configured limit
/// - 503 Service Unavailable: provider unreachable or timed out
/// - 502 Bad Gateway: provider answered with something other than JSON
/// - Provider status forwarded as-is when it answers with a non-200
pub async fn detect_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<DetectResponse>, ApiErrorResponse> {
    let request_id = Uuid::new_v4().to_string();
    let fail = |error: ApiError| ApiErrorResponse::new(error, Some(request_id.clone()));

    // 1. Pull the image out of the form
    let upload = read_upload(multipart, state.max_upload_bytes)
        .await
        .map_err(|e| {
            warn!("[{}] Rejected upload: {}", request_id, e);
            fail(e)
        })?;

    info!(
        "[{}] Detect request: {} ({}, {} bytes)",
        request_id,
        upload.file_name,
        upload.content_type,
        upload.size()
    );

    // 2. Forward to the provider
    let start = Instant::now();
    let raw = state.backend.detect(&upload).await.map_err(|e| {
        if e.is_timeout() {
            warn!("[{}] {} timed out: {}", request_id, state.backend.name(), e);
        } else {
            warn!("[{}] {} failed: {}", request_id, state.backend.name(), e);
        }
        fail(e.into())
    })?;

    // 3. Normalize
    let detections = normalize(&raw);
    let processing_time_ms = start.elapsed().as_millis() as u64;

    info!(
        "[{}] Detection complete: {} detections in {}ms",
        request_id,
        detections.len(),
        processing_time_ms
    );

    Ok(Json(DetectResponse::new(
        detections,
        raw,
        processing_time_ms,
        request_id,
    )))
}

async fn read_upload(mut multipart: Multipart, max_bytes: usize) -> Result<ImageUpload, ApiError> {
    let malformed = |e: MultipartError| multipart_error(e, max_bytes);

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        if field.name() != Some(FILE_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(malformed)?;

        return Ok(ImageUpload::new(file_name, content_type, bytes, max_bytes)?);
    }

    Err(ApiError::ValidationError {
        field: FILE_FIELD.to_string(),
        message: "No file uploaded".to_string(),
    })
}

fn multipart_error(e: MultipartError, max_bytes: usize) -> ApiError {
    // The body limit layer surfaces as a multipart read error
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge {
            size: None,
            limit: max_bytes,
        };
    }
    ApiError::InvalidRequest(format!("Malformed multipart body: {}", e.body_text()))
}
