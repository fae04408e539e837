/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Errors raised by operators and reductions.

/// An operator could not produce a value for its operands.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The right operand of a division was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// The error type for [`crate::zip`] and its variants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ZipError {
    /// The operator sequence was empty.
    #[error("invalid argument: at least one operator is required")]
    NoOperators,

    /// Fewer operands than operators were supplied.
    #[error("invalid argument: {operands} operands supplied for {operators} operators")]
    TooFewOperands {
        /// Number of operands supplied.
        operands: usize,
        /// Number of operators supplied.
        operators: usize,
    },

    /// The operand count was not exactly one more than the operator
    /// count (strict reductions only).
    #[error(
        "invalid argument: {operators} operators require exactly {} operands, got {operands}",
        .operators + 1
    )]
    ArityMismatch {
        /// Number of operands supplied.
        operands: usize,
        /// Number of operators supplied.
        operators: usize,
    },

    /// An operator failed; the reduction was aborted.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl ZipError {
    /// Whether the inputs were rejected before any operator ran.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ZipError::NoOperators
                | ZipError::TooFewOperands { .. }
                | ZipError::ArityMismatch { .. }
        )
    }
}

/// A name did not match any built-in operator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator '{0}': expected one of add, diff, mult, div")]
pub struct UnknownOperator(pub String);
