// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tracing subscriber setup shared by the binaries

use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, or `default_level` when it is unset, blank or unparseable.
pub fn env_filter(default_level: &str) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(from_env.as_deref(), default_level)
}

fn filter_from(directives: Option<&str>, default_level: &str) -> EnvFilter {
    directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Log to stdout (server)
pub fn init(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .init();
}

/// Log to stderr so stdout carries only command output (CLI)
pub fn init_stderr(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .init();
}
