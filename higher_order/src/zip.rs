/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Sequential reduction of operands by a sequence of operators.
//!
//! Operator `i` combines the running accumulator with operand `i + 1`:
//!
//! ```text
//! operands:  [1, 1, 3, 0, 4]
//! operators: [add, mult, add, div]
//!
//! acc = 1
//! add(1, 1)  -> 2
//! mult(2, 3) -> 6
//! add(6, 0)  -> 6
//! div(6, 4)  -> 1
//! ```
//!
//! The fold stops as soon as either sequence is exhausted. Operands
//! past `operators.len() + 1` are ignored by [`zip`]; use
//! [`zip_exact`] to reject them. When there are exactly as many
//! operands as operators, the last operator has no right operand and
//! is not applied.

use crate::error::ZipError;
use crate::operator::NamedOperator;

/// Reduce `operands` left to right with `operators`, returning the
/// final accumulator.
///
/// # Errors
///
/// - [`ZipError::NoOperators`] if `operators` is empty.
/// - [`ZipError::TooFewOperands`] if `operands` is shorter than
///   `operators`.
/// - [`ZipError::Arithmetic`] if any operator fails; no partial
///   result is returned.
///
/// # Example
///
/// ```
/// use higher_order::ADD;
/// use higher_order::DIFF;
/// use higher_order::zip;
///
/// // (10 - 4) + 3
/// assert_eq!(zip(&[10.0, 4.0, 3.0], &[DIFF, ADD]), Ok(9.0));
/// ```
pub fn zip<T: Clone>(operands: &[T], operators: &[NamedOperator<T>]) -> Result<T, ZipError> {
    check_lenient(operands, operators)?;
    fold(operands, operators, |_| {})
}

/// Like [`zip`], but requires exactly one more operand than
/// operators.
///
/// # Errors
///
/// [`ZipError::ArityMismatch`] when `operands.len() !=
/// operators.len() + 1`, in addition to the errors of [`zip`].
pub fn zip_exact<T: Clone>(operands: &[T], operators: &[NamedOperator<T>]) -> Result<T, ZipError> {
    check_lenient(operands, operators)?;
    if operands.len() != operators.len() + 1 {
        tracing::debug!(
            operands = operands.len(),
            operators = operators.len(),
            "rejecting reduction with mismatched arity"
        );
        return Err(ZipError::ArityMismatch {
            operands: operands.len(),
            operators: operators.len(),
        });
    }
    fold(operands, operators, |_| {})
}

/// Like [`zip`], but returns the accumulator after every applied
/// operator instead of only the last one.
///
/// ```
/// use higher_order::ADD;
/// use higher_order::DIV;
/// use higher_order::MULT;
/// use higher_order::zip_steps;
///
/// let steps = zip_steps(&[1.0, 1.0, 3.0, 0.0, 4.0], &[ADD, MULT, ADD, DIV]).unwrap();
/// assert_eq!(steps, vec![2.0, 6.0, 6.0, 1.0]);
/// ```
pub fn zip_steps<T: Clone>(
    operands: &[T],
    operators: &[NamedOperator<T>],
) -> Result<Vec<T>, ZipError> {
    check_lenient(operands, operators)?;
    let mut steps = Vec::with_capacity(operators.len().min(operands.len().saturating_sub(1)));
    fold(operands, operators, |acc: &T| steps.push(acc.clone()))?;
    Ok(steps)
}

fn check_lenient<T>(operands: &[T], operators: &[NamedOperator<T>]) -> Result<(), ZipError> {
    let result = if operators.is_empty() {
        Err(ZipError::NoOperators)
    } else if operands.len() < operators.len() {
        Err(ZipError::TooFewOperands {
            operands: operands.len(),
            operators: operators.len(),
        })
    } else {
        Ok(())
    };
    if let Err(ref err) = result {
        tracing::debug!(
            operands = operands.len(),
            operators = operators.len(),
            "rejecting reduction: {}",
            err
        );
    }
    result
}

/// Callers must have checked that `operands` is non-empty.
fn fold<T: Clone>(
    operands: &[T],
    operators: &[NamedOperator<T>],
    mut on_step: impl FnMut(&T),
) -> Result<T, ZipError> {
    let (first, rest) = operands
        .split_first()
        .ok_or(ZipError::TooFewOperands {
            operands: 0,
            operators: operators.len(),
        })?;
    operators
        .iter()
        .zip(rest)
        .enumerate()
        .try_fold(first.clone(), |acc, (step, (op, rhs))| {
            let acc = op.apply(acc, rhs.clone()).inspect_err(|err| {
                tracing::debug!(step, operator = op.name(), "reduction aborted: {}", err);
            })?;
            tracing::trace!(step, operator = op.name(), "applied");
            on_step(&acc);
            Ok(acc)
        })
}
