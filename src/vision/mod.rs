// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image upload handling and the hosted inference client
//!
//! This module provides:
//! - Upload validation and MIME sniffing (no decoding happens here)
//! - The `DetectionBackend` seam and its Roboflow implementation

pub mod inference_client;
pub mod upload;

pub use inference_client::{DetectionBackend, InferenceError, RoboflowClient};
pub use upload::{detect_kind, ImageKind, ImageUpload, UploadError};
