/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Configuration keys for the demo, resolved from the environment.
//!
//! Command-line flags take precedence over every value here.

use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

/// Log filter directive, in `EnvFilter` syntax. Falls back to
/// `RUST_LOG`, then to [`DEFAULT_LOG_FILTER`].
pub const LOG_FILTER_ENV: &str = "HIGHER_ORDER_LOG";

/// Output format: `text` or `json`.
pub const OUTPUT_ENV: &str = "HIGHER_ORDER_OUTPUT";

/// Default input to the `compose` command.
pub const COMPOSE_AT_ENV: &str = "HIGHER_ORDER_COMPOSE_AT";

/// Used when neither [`LOG_FILTER_ENV`] nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// The input of the original `sin(cos(x))` demonstration.
pub const DEFAULT_COMPOSE_AT: f64 = 5.0;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format '{}': expected text or json", other),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Resolved demo configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub log_filter: String,
    pub output: OutputFormat,
    pub compose_at: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::default(),
            compose_at: DEFAULT_COMPOSE_AT,
        }
    }
}

impl Config {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the configuration from an arbitrary variable lookup.
    /// Unset and empty variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(filter) = get(LOG_FILTER_ENV).or_else(|| get("RUST_LOG")) {
            config.log_filter = filter;
        }
        if let Some(output) = get(OUTPUT_ENV) {
            config.output = output
                .parse()
                .with_context(|| format!("invalid {}", OUTPUT_ENV))?;
        }
        if let Some(at) = get(COMPOSE_AT_ENV) {
            config.compose_at = at
                .trim()
                .parse()
                .with_context(|| format!("invalid {}: '{}' is not a number", COMPOSE_AT_ENV, at))?;
        }

        Ok(config)
    }
}
