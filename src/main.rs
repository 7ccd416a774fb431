// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use roadsign_detect::{api::start_server, config::DetectorConfig, logging, version};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging (RUST_LOG overrides)
    logging::init("info");

    info!("{}", version::get_version_string());

    // Reads .env, fails fast when the provider URL or key is missing
    let config = DetectorConfig::from_env()?;
    info!("Configuration loaded: {:?}", config);

    start_server(config).await
}
