// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::output::OutputArgs;
use crate::config::DetectorConfig;
use crate::detection::normalize;
use crate::vision::{DetectionBackend, ImageUpload, RoboflowClient};

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Image file to send for detection
    #[arg(long)]
    pub image: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Send a local image to the configured provider and print the detections
pub async fn run(args: DetectArgs) -> Result<()> {
    let config = DetectorConfig::from_env()?;
    let client = RoboflowClient::from_config(&config)?;

    let upload = ImageUpload::from_path(&args.image, config.max_upload_bytes).await?;
    info!(
        "Sending {} ({} bytes) to {}",
        args.image.display(),
        upload.size(),
        client.endpoint()
    );

    let raw = client.detect(&upload).await?;
    args.output.print(normalize(&raw))
}
