// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tokio::io::AsyncReadExt;
use tracing::debug;

use super::output::OutputArgs;
use crate::detection::{normalize, Detection};

/// Arguments for the normalize command
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Saved provider response (JSON file), or `-` to read stdin
    #[arg(long, short)]
    pub input: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Normalize a saved provider response without calling the provider
pub async fn run(args: NormalizeArgs) -> Result<()> {
    let text = read_input(&args.input).await?;
    let detections = normalize_text(&text)?;
    debug!("Normalized {} detections from {}", detections.len(), args.input);
    args.output.print(detections)
}

pub fn normalize_text(text: &str) -> Result<Vec<Detection>> {
    let payload: Value = serde_json::from_str(text).context("Input is not valid JSON")?;
    Ok(normalize(&payload))
}

async fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        return Ok(buf);
    }

    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input))
}
