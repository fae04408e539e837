/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Named binary operators, sequential reduction, and function
//! composition.
//!
//! # Quick Start
//!
//! ```rust
//! use higher_order::ADD;
//! use higher_order::DIV;
//! use higher_order::MULT;
//! use higher_order::compose;
//! use higher_order::zip;
//!
//! // ((1 + 1) * 3 + 0) / 4, truncated.
//! let result = zip(&[1.0, 1.0, 3.0, 0.0, 4.0], &[ADD, MULT, ADD, DIV]).unwrap();
//! assert_eq!(result, 1.0);
//!
//! let h = compose(f64::sin, f64::cos);
//! assert_eq!(h(5.0), 5.0f64.cos().sin());
//! ```
//!
//! # Core Concepts
//!
//! - **NamedOperator**: an immutable pairing of a label and a binary
//!   function `fn(T, T) -> Result<T, ArithmeticError>`. The label is
//!   informational; it never affects evaluation.
//!
//! - **Zip**: a left fold that pairs the i-th operator with the
//!   (i+1)-th operand, threading the accumulator forward:
//!
//!   ```text
//!   operands  = [a0, a1, a2, a3]
//!   operators = [f0, f1, f2]
//!   result    = f2(f1(f0(a0, a1), a2), a3)
//!   ```
//!
//! - **Composition**: `compose(f, g)` is the function `x ↦ f(g(x))`.
//!
//! # Provided Operators
//!
//! | constant | name   | value                              |
//! |----------|--------|------------------------------------|
//! | [`ADD`]  | `add`  | `a + b`                            |
//! | [`DIFF`] | `diff` | `a - b`                            |
//! | [`MULT`] | `mult` | `a * b`                            |
//! | [`DIV`]  | `div`  | `a / b` truncated toward zero      |
//!
//! [`DIV`] fails with [`ArithmeticError::DivisionByZero`] when the
//! divisor is zero; that error aborts any enclosing [`zip`].

mod compose;
mod error;
mod max;
mod operator;
mod zip;

/// Property-based generators for randomized test input.
#[cfg(test)]
pub mod strategy;

pub use compose::and_then;
pub use compose::compose;
pub use error::ArithmeticError;
pub use error::UnknownOperator;
pub use error::ZipError;
pub use max::maximum;
pub use operator::ADD;
pub use operator::BUILTINS;
pub use operator::DIFF;
pub use operator::DIV;
pub use operator::MULT;
pub use operator::NamedOperator;
pub use operator::builtin;
pub use zip::zip;
pub use zip::zip_exact;
pub use zip::zip_steps;
