// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection response normalization
//!
//! Community-trained models hosted on the inference provider disagree on
//! field names and box encodings. This module folds every known variant
//! into one [`Detection`] record:
//! - label from `class` / `label` / `name`
//! - confidence from `confidence` / `score` / `confidence_score`
//! - center-form geometry (`x`, `y`, `width`, `height` and aliases)
//! - corner-form boxes (`bbox` / `box` / `bounding_box`) converted to center form
//!
//! Normalization never fails: anything missing or unreadable becomes `None`.

pub mod aliases;
pub mod normalizer;
pub mod types;

pub use normalizer::{normalize, normalize_prediction};
pub use types::Detection;
