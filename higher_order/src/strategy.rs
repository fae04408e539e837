/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property-based generators for operands and operator sequences.
//!
//! Operands are finite and bounded so that folds over the built-in
//! operators stay finite and comparable with `==`.
//!
//! This module is only included in test builds (`#[cfg(test)]`).

use std::ops::Range;

use proptest::prelude::*;

use crate::operator::BUILTINS;
use crate::operator::NamedOperator;

/// Generates a single finite operand in `[-1000, 1000)`.
pub fn gen_operand() -> impl Strategy<Value = f64> {
    -1000.0f64..1000.0
}

/// Generates a vector of operands whose length lies in `len`.
pub fn gen_operands(len: Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(gen_operand(), len)
}

/// Generates one of the built-in operators.
pub fn gen_builtin() -> impl Strategy<Value = NamedOperator<f64>> {
    prop::sample::select(BUILTINS.to_vec())
}

/// Generates a well-formed `(operands, operators)` pair with between
/// 1 and `max_ops` operators and exactly one more operand.
pub fn gen_zip_input(
    max_ops: usize,
) -> impl Strategy<Value = (Vec<f64>, Vec<NamedOperator<f64>>)> {
    prop::collection::vec(gen_builtin(), 1..=max_ops).prop_flat_map(|operators| {
        let n = operators.len() + 1;
        (gen_operands(n..n + 1), Just(operators))
    })
}
