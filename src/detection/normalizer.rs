// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Provider payload -> canonical detections

use serde_json::Value;

use super::aliases::{
    first_present, BOX_KEYS, BOX_X1_KEYS, BOX_X2_KEYS, BOX_Y1_KEYS, BOX_Y2_KEYS, CENTER_X_KEYS,
    CENTER_Y_KEYS, CONFIDENCE_KEYS, CONTAINER_KEYS, HEIGHT_KEYS, LABEL_KEYS, WIDTH_KEYS,
};
use super::types::Detection;

/// Normalize a raw inference payload into canonical detections.
///
/// The prediction list is taken from the first of `predictions`, `preds`,
/// `objects` that holds a non-empty array. A payload without one yields an
/// empty vector. Every prediction produces exactly one record, in input
/// order; nothing is filtered or sorted.
///
/// # Example
/// ```
/// use roadsign_detect::detection::normalize;
/// use serde_json::json;
///
/// let payload = json!({"predictions": [{"class": "stop", "bbox": [10, 20, 50, 60]}]});
/// let detections = normalize(&payload);
/// assert_eq!(detections[0].x, Some(30.0));
/// assert_eq!(detections[0].width, Some(40.0));
/// ```
pub fn normalize(payload: &Value) -> Vec<Detection> {
    predictions(payload)
        .iter()
        .map(normalize_prediction)
        .collect()
}

/// Normalize a single prediction record.
pub fn normalize_prediction(raw: &Value) -> Detection {
    let label = first_present(raw, LABEL_KEYS).and_then(label_text);
    let confidence = first_present(raw, CONFIDENCE_KEYS).and_then(coerce_f64);

    let mut geometry = Geometry {
        x: first_present(raw, CENTER_X_KEYS).and_then(coerce_f64),
        y: first_present(raw, CENTER_Y_KEYS).and_then(coerce_f64),
        width: first_present(raw, WIDTH_KEYS).and_then(coerce_f64),
        height: first_present(raw, HEIGHT_KEYS).and_then(coerce_f64),
    };

    if let Some(corners) = first_present(raw, BOX_KEYS).and_then(box_corners) {
        geometry.override_from_corners(corners);
    }

    Detection {
        label,
        confidence,
        x: geometry.x,
        y: geometry.y,
        width: geometry.width,
        height: geometry.height,
        raw: raw.clone(),
    }
}

fn predictions(payload: &Value) -> &[Value] {
    CONTAINER_KEYS
        .iter()
        .filter_map(|key| payload.get(*key))
        .filter_map(Value::as_array)
        .find(|items| !items.is_empty())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Center-form box under construction
struct Geometry {
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
}

impl Geometry {
    /// Replace the center-form values with ones derived from `[x1, y1, x2, y2]`.
    ///
    /// Corners must be JSON numbers. The fields are written in the order
    /// x, y, width, height and the first non-numeric pair stops the update,
    /// so fields written before it keep their new values.
    fn override_from_corners(&mut self, [x1, y1, x2, y2]: [&Value; 4]) {
        let Some((x1, x2)) = numeric_pair(x1, x2) else {
            return;
        };
        self.x = Some((x1 + x2) / 2.0);

        let Some((y1, y2)) = numeric_pair(y1, y2) else {
            return;
        };
        self.y = Some((y1 + y2) / 2.0);
        self.width = Some(x2 - x1);
        self.height = Some(y2 - y1);
    }
}

/// Extract `[x1, y1, x2, y2]` from a sequence or mapping box.
///
/// Mapping boxes missing any corner are ignored entirely.
fn box_corners(bbox: &Value) -> Option<[&Value; 4]> {
    match bbox {
        Value::Array(items) if items.len() == 4 => {
            Some([&items[0], &items[1], &items[2], &items[3]])
        }
        Value::Object(_) => Some([
            first_present(bbox, BOX_X1_KEYS)?,
            first_present(bbox, BOX_Y1_KEYS)?,
            first_present(bbox, BOX_X2_KEYS)?,
            first_present(bbox, BOX_Y2_KEYS)?,
        ]),
        _ => None,
    }
}

fn numeric_pair(a: &Value, b: &Value) -> Option<(f64, f64)> {
    Some((a.as_f64()?, b.as_f64()?))
}

/// Numbers pass through, numeric strings are parsed, everything else is `None`.
fn coerce_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Some models report a numeric class id instead of a name.
fn label_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
