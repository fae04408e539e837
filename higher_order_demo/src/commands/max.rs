/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;

use anyhow::Context;
use higher_order::maximum;
use serde::Serialize;

use crate::commands::Report;

#[derive(clap::Args, Debug)]
pub struct MaxCommand {
    /// The values to compare.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaxReport {
    pub values: Vec<f64>,
    pub max: f64,
}

impl fmt::Display for MaxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.max)
    }
}

impl MaxCommand {
    pub fn run(self) -> anyhow::Result<Report> {
        let max = *maximum(&self.values).context("max requires at least one value")?;
        Ok(Report::Max(MaxReport {
            values: self.values,
            max,
        }))
    }
}
