// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the road sign detection service

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-roadsign-detect-2026-10-18";

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Build date
pub const BUILD_DATE: &str = "2026-10-18";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "roboflow-inference",
    "response-normalization",
    "field-aliases",
    "corner-box-geometry",
    "sign-descriptions",
    "upload-ui",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Road Sign Detect {} ({})", VERSION_NUMBER, BUILD_DATE)
}
