/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;

use anyhow::Context;
use higher_order::NamedOperator;
use serde::Serialize;

use crate::commands::Report;

#[derive(clap::Args, Debug)]
pub struct ZipCommand {
    /// Comma-separated operands, e.g. 1,1,3,0,4.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    operands: Vec<f64>,

    /// Comma-separated operator names (add, diff, mult, div).
    #[arg(long, value_delimiter = ',')]
    operators: Vec<NamedOperator<f64>>,

    /// Require exactly one more operand than operators.
    #[arg(long)]
    exact: bool,

    /// Also report the accumulator after each step.
    #[arg(long)]
    steps: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZipReport {
    pub operands: Vec<f64>,
    pub operators: Vec<NamedOperator<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<f64>>,
    pub result: f64,
}

impl fmt::Display for ZipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(steps) = &self.steps {
            for ((op, rhs), acc) in self.operators.iter().zip(&self.operands[1..]).zip(steps) {
                writeln!(f, "{} {} -> {}", op, rhs, acc)?;
            }
        }
        write!(f, "{}", self.result)
    }
}

impl ZipCommand {
    pub fn run(self) -> anyhow::Result<Report> {
        let context = || {
            format!(
                "reducing {} operands with {} operators",
                self.operands.len(),
                self.operators.len()
            )
        };

        let result = if self.exact {
            higher_order::zip_exact(&self.operands, &self.operators)
        } else {
            higher_order::zip(&self.operands, &self.operators)
        }
        .with_context(context)?;

        let steps = if self.steps {
            Some(higher_order::zip_steps(&self.operands, &self.operators).with_context(context)?)
        } else {
            None
        };

        Ok(Report::Zip(ZipReport {
            operands: self.operands,
            operators: self.operators,
            steps,
            result,
        }))
    }
}
