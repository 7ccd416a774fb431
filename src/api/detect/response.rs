// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::detection::Detection;
use crate::signs::describe_detection_label;

pub const SUCCESS_MESSAGE: &str = "Detection successful";

/// Response from a successful detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    /// Always "Detection successful"
    pub message: String,
    /// Normalized detections, in provider order
    pub detections: Vec<Detection>,
    /// Driver-facing description for each detection, same order as `detections`
    pub descriptions: Vec<String>,
    /// Provider payload exactly as received
    pub raw: Value,
    /// Time spent waiting on the provider plus normalization
    pub processing_time_ms: u64,
    pub request_id: String,
}

impl DetectResponse {
    pub fn new(
        detections: Vec<Detection>,
        raw: Value,
        processing_time_ms: u64,
        request_id: String,
    ) -> Self {
        let descriptions = detections
            .iter()
            .map(|d| describe_detection_label(d.label.as_deref()))
            .collect();

        Self {
            message: SUCCESS_MESSAGE.to_string(),
            detections,
            descriptions,
            raw,
            processing_time_ms,
            request_id,
        }
    }
}
