/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;

use higher_order::compose;
use serde::Serialize;

use crate::commands::Report;
use crate::config::Config;

#[derive(clap::Args, Debug)]
pub struct ComposeCommand {
    /// The input to sin(cos(x)). Defaults to HIGHER_ORDER_COMPOSE_AT,
    /// or 5.0.
    #[arg(long, allow_negative_numbers = true)]
    at: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposeReport {
    pub function: &'static str,
    pub input: f64,
    pub result: f64,
}

impl fmt::Display for ComposeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.result)
    }
}

impl ComposeCommand {
    pub fn run(self, config: &Config) -> anyhow::Result<Report> {
        let input = self.at.unwrap_or(config.compose_at);
        let h = compose(f64::sin, f64::cos);
        let result = h(input);
        tracing::debug!(input, result, "composed sin after cos");
        Ok(Report::Compose(ComposeReport {
            function: "sin∘cos",
            input,
            result,
        }))
    }
}
