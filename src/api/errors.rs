// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::vision::{InferenceError, UploadError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    pub request_id: Option<String>,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    NotFound(String),
    InvalidRequest(String),
    ValidationError {
        field: String,
        message: String,
    },
    /// `size` is unknown when the body limit cut the stream short
    PayloadTooLarge {
        size: Option<usize>,
        limit: usize,
    },
    /// Inference provider unreachable or timed out
    ServiceUnavailable(String),
    /// Inference provider answered with a non-200 status
    UpstreamStatus {
        status: u16,
        body: String,
    },
    BadGateway(String),
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self, request_id: Option<String>) -> ErrorResponse {
        let (error_type, message, details) = match self {
            ApiError::NotFound(msg) => ("not_found", msg.clone(), None),
            ApiError::InvalidRequest(msg) => ("invalid_request", msg.clone(), None),
            ApiError::ValidationError { field, message } => {
                let mut details = HashMap::new();
                details.insert(
                    "field".to_string(),
                    serde_json::Value::String(field.clone()),
                );
                ("validation_error", message.clone(), Some(details))
            }
            ApiError::PayloadTooLarge { size, limit } => {
                let mut details = HashMap::new();
                if let Some(size) = size {
                    details.insert("size".to_string(), serde_json::Value::from(*size));
                }
                details.insert("limit".to_string(), serde_json::Value::from(*limit));
                (
                    "payload_too_large",
                    format!("Image exceeds maximum size of {} bytes", limit),
                    Some(details),
                )
            }
            ApiError::ServiceUnavailable(msg) => ("service_unavailable", msg.clone(), None),
            ApiError::UpstreamStatus { status, body } => {
                let mut details = HashMap::new();
                details.insert(
                    "upstream_status".to_string(),
                    serde_json::Value::from(*status),
                );
                (
                    "upstream_error",
                    format!("Roboflow returned {}: {}", status, body),
                    Some(details),
                )
            }
            ApiError::BadGateway(msg) => ("bad_gateway", msg.clone(), None),
            ApiError::InternalError(msg) => ("internal_error", msg.clone(), None),
        };

        ErrorResponse {
            error_type: error_type.to_string(),
            message,
            request_id,
            details,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::InvalidRequest(_) | ApiError::ValidationError { .. } => 400,
            ApiError::PayloadTooLarge { .. } => 413,
            ApiError::ServiceUnavailable(_) => 503,
            ApiError::UpstreamStatus { status, .. } => *status,
            ApiError::BadGateway(_) => 502,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::ValidationError { field, message } => {
                write!(f, "Validation error for {}: {}", field, message)
            }
            ApiError::PayloadTooLarge {
                size: Some(size),
                limit,
            } => write!(f, "Payload too large: {} bytes (max: {} bytes)", size, limit),
            ApiError::PayloadTooLarge { size: None, limit } => {
                write!(f, "Payload too large (max: {} bytes)", limit)
            }
            ApiError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            ApiError::UpstreamStatus { status, body } => {
                write!(f, "Roboflow returned {}: {}", status, body)
            }
            ApiError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Empty => ApiError::ValidationError {
                field: "file".to_string(),
                message: err.to_string(),
            },
            UploadError::TooLarge(size, limit) => ApiError::PayloadTooLarge {
                size: Some(size),
                limit,
            },
            UploadError::Io(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<InferenceError> for ApiError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Request(_) => ApiError::ServiceUnavailable(err.to_string()),
            InferenceError::Status { status, body } => ApiError::UpstreamStatus { status, body },
            InferenceError::NonJson => ApiError::BadGateway(err.to_string()),
        }
    }
}
