// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod detect;
pub mod normalize;
pub mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::signs;

/// Road sign detection CLI
#[derive(Parser, Debug)]
#[command(name = "roadsign-cli")]
#[command(version)]
#[command(about = "Detect road signs and normalize detection responses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize a saved provider response
    Normalize(normalize::NormalizeArgs),

    /// Run detection on a local image via the configured provider
    Detect(detect::DetectArgs),

    /// Print the driver-facing description for a sign label
    Describe(DescribeArgs),
}

/// Arguments for describe command
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Sign label, e.g. "speed limit 50 km/h"
    pub label: String,
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Normalize(args) => normalize::run(args).await,
        Commands::Detect(args) => detect::run(args).await,
        Commands::Describe(args) => {
            println!("{}", signs::describe_sign(&args.label));
            Ok(())
        }
    }
}
