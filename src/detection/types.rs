// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Canonical detection record

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One detected object in the canonical schema
///
/// `x`/`y` are always the box center and `width`/`height` the full extents,
/// whatever encoding the provider used. Absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class label reported by the model
    pub label: Option<String>,
    /// Confidence score, usually 0.0-1.0
    pub confidence: Option<f64>,
    /// Box center, x axis
    pub x: Option<f64>,
    /// Box center, y axis
    pub y: Option<f64>,
    /// Full box width
    pub width: Option<f64>,
    /// Full box height
    pub height: Option<f64>,
    /// The provider's original prediction record, untouched
    pub raw: Value,
}

impl Detection {
    /// Whether the confidence is known and at least `min`.
    pub fn meets_confidence(&self, min: f64) -> bool {
        self.confidence.map(|c| c >= min).unwrap_or(false)
    }

    /// Corner-form box `[x1, y1, x2, y2]`, when all four geometry fields are known.
    pub fn corners(&self) -> Option<[f64; 4]> {
        let (x, y, w, h) = (self.x?, self.y?, self.width?, self.height?);
        Some([x - w / 2.0, y - h / 2.0, x + w / 2.0, y + h / 2.0])
    }
}
