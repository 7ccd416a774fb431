// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod detection;
pub mod logging;
pub mod signs;
pub mod version;
pub mod vision;

// Re-export main types
pub use config::{ConfigError, DetectorConfig};
pub use detection::{normalize, normalize_prediction, Detection};
pub use signs::describe_sign;
pub use vision::{DetectionBackend, ImageUpload, InferenceError, RoboflowClient};
