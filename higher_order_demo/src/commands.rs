/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;

use serde::Serialize;

use crate::config::OutputFormat;

pub mod compose;
pub mod max;
pub mod zip;

/// The result of running a command.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Compose(compose::ComposeReport),
    Zip(zip::ZipReport),
    Max(max::MaxReport),
}

impl Report {
    /// Render the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        Ok(match format {
            OutputFormat::Text => self.to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Compose(report) => fmt::Display::fmt(report, f),
            Report::Zip(report) => fmt::Display::fmt(report, f),
            Report::Max(report) => fmt::Display::fmt(report, f),
        }
    }
}
