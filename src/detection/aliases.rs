// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Field alias tables, in probe order
//!
//! The first key present (and not `null`) in a group wins.

use serde_json::Value;

/// Keys that may hold the prediction list
pub const CONTAINER_KEYS: &[&str] = &["predictions", "preds", "objects"];

pub const LABEL_KEYS: &[&str] = &["class", "label", "name"];
pub const CONFIDENCE_KEYS: &[&str] = &["confidence", "score", "confidence_score"];

pub const CENTER_X_KEYS: &[&str] = &["x", "center_x", "cx"];
pub const CENTER_Y_KEYS: &[&str] = &["y", "center_y", "cy"];
pub const WIDTH_KEYS: &[&str] = &["width", "w"];
pub const HEIGHT_KEYS: &[&str] = &["height", "h"];

/// Keys that may hold a corner-form box
pub const BOX_KEYS: &[&str] = &["bbox", "box", "bounding_box"];

// Corner names inside a mapping-form box
pub const BOX_X1_KEYS: &[&str] = &["x1", "left"];
pub const BOX_Y1_KEYS: &[&str] = &["y1", "top"];
pub const BOX_X2_KEYS: &[&str] = &["x2", "right"];
pub const BOX_Y2_KEYS: &[&str] = &["y2", "bottom"];

/// Return the value of the first key in `keys` that is present and not `null`.
///
/// Non-object values have no keys, so they always yield `None`.
pub fn first_present<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find(|candidate| !candidate.is_null())
}
