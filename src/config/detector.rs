// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration loaded from `.env` and the process environment

use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const ENV_API_URL: &str = "ROBOFLOW_API_URL";
pub const ENV_API_KEY: &str = "ROBOFLOW_API_KEY";
pub const ENV_REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
pub const ENV_API_HOST: &str = "API_HOST";
pub const ENV_API_PORT: &str = "API_PORT";
pub const ENV_MAX_UPLOAD_BYTES: &str = "MAX_UPLOAD_BYTES";

/// Seconds to wait for the inference provider
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const DEFAULT_API_HOST: &str = "127.0.0.1";
const DEFAULT_API_PORT: u16 = 8080;
/// 10MB
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set. Add it to your environment or .env file")]
    Missing(&'static str),

    #[error("{var} has an invalid value: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Settings for the detection service
#[derive(Clone)]
pub struct DetectorConfig {
    /// Hosted model endpoint, e.g. `https://detect.roboflow.com/<project>/<version>`
    pub api_url: String,
    pub api_key: String,
    pub request_timeout: Duration,
    pub host: String,
    pub port: u16,
    /// Largest accepted upload, in bytes
    pub max_upload_bytes: usize,
}

impl DetectorConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_url = var(ENV_API_URL).ok_or(ConfigError::Missing(ENV_API_URL))?;
        let api_key = var(ENV_API_KEY).ok_or(ConfigError::Missing(ENV_API_KEY))?;

        let timeout_secs = parse_or(
            var(ENV_REQUEST_TIMEOUT),
            ENV_REQUEST_TIMEOUT,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        let port = parse_or(var(ENV_API_PORT), ENV_API_PORT, DEFAULT_API_PORT)?;
        let max_upload_bytes = parse_or(
            var(ENV_MAX_UPLOAD_BYTES),
            ENV_MAX_UPLOAD_BYTES,
            DEFAULT_MAX_UPLOAD_BYTES,
        )?;

        Ok(Self {
            api_url: api_url.trim().to_string(),
            api_key: api_key.trim().to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
            host: var(ENV_API_HOST)
                .map(|host| host.trim().to_string())
                .unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            port,
            max_upload_bytes,
        })
    }

    /// `host:port` the HTTP server binds to. Host names are resolved at bind time.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// The API key must never end up in logs
impl fmt::Debug for DetectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectorConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            var,
            value: raw,
        }),
        None => Ok(default),
    }
}
