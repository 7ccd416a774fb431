// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client for the hosted object-detection inference API

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use serde_json::Value;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::upload::{ImageUpload, DEFAULT_CONTENT_TYPE};
use crate::config::DetectorConfig;

#[derive(Debug, Error)]
pub enum InferenceError {
    /// Transport failure: DNS, connect, TLS, timeout
    ///
    /// Not exposed as `source()`: the message already carries it.
    #[error("Roboflow request failed: {0}")]
    Request(reqwest::Error),

    #[error("Roboflow returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Roboflow returned non-JSON response")]
    NonJson,
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        InferenceError::Request(err)
    }
}

impl InferenceError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, InferenceError::Request(e) if e.is_timeout())
    }
}

/// Something that turns an image into a raw detection payload
#[async_trait]
pub trait DetectionBackend: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Run detection and return the provider's JSON exactly as received.
    async fn detect(&self, upload: &ImageUpload) -> Result<Value, InferenceError>;
}

/// Roboflow hosted inference over HTTP
///
/// Posts the image as multipart form field `file` to the model URL, with the
/// API key passed as the `api_key` query parameter.
pub struct RoboflowClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RoboflowClient {
    pub fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        info!(
            "Roboflow client configured: endpoint={}, timeout={:?}",
            endpoint, timeout
        );

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &DetectorConfig) -> Result<Self> {
        Self::new(&config.api_url, &config.api_key, config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn file_part(upload: &ImageUpload) -> Result<Part, reqwest::Error> {
        let part = || {
            Part::stream_with_length(upload.bytes.clone(), upload.size() as u64)
                .file_name(upload.file_name.clone())
        };

        // Clients occasionally send content types reqwest cannot parse
        part().mime_str(&upload.content_type).or_else(|_| {
            warn!(
                "Unparseable content type '{}', sending as {}",
                upload.content_type, DEFAULT_CONTENT_TYPE
            );
            part().mime_str(DEFAULT_CONTENT_TYPE)
        })
    }
}

#[async_trait]
impl DetectionBackend for RoboflowClient {
    fn name(&self) -> &str {
        "roboflow"
    }

    async fn detect(&self, upload: &ImageUpload) -> Result<Value, InferenceError> {
        let start = Instant::now();
        let form = Form::new().part("file", Self::file_part(upload)?);

        debug!(
            "Sending {} ({}, {} bytes) to Roboflow",
            upload.file_name,
            upload.content_type,
            upload.size()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("api_key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!("Roboflow returned {}: {} bytes of body", status, body.len());
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = serde_json::from_str(&body).map_err(|e| {
            warn!("Roboflow response is not JSON: {}", e);
            InferenceError::NonJson
        })?;

        info!(
            "Roboflow inference complete in {}ms",
            start.elapsed().as_millis()
        );

        Ok(payload)
    }
}
