/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Named binary operators and the built-in `f64` table.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::ArithmeticError;
use crate::error::UnknownOperator;

/// A binary operation over `T`, paired with a human-readable name.
///
/// The name is informational only; two operators with the same
/// function but different names evaluate identically.
///
/// # Example
///
/// ```
/// use higher_order::ArithmeticError;
/// use higher_order::NamedOperator;
///
/// fn max(a: i64, b: i64) -> Result<i64, ArithmeticError> {
///     Ok(a.max(b))
/// }
///
/// const MAX: NamedOperator<i64> = NamedOperator::new("max", max);
///
/// assert_eq!(MAX.name(), "max");
/// assert_eq!(MAX.apply(3, 7), Ok(7));
/// ```
pub struct NamedOperator<T> {
    name: &'static str,
    apply: fn(T, T) -> Result<T, ArithmeticError>,
}

impl<T> NamedOperator<T> {
    /// Create an operator from a name and a function.
    pub const fn new(name: &'static str, apply: fn(T, T) -> Result<T, ArithmeticError>) -> Self {
        Self { name, apply }
    }

    /// The operator's label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the operator to `lhs` and `rhs`.
    pub fn apply(&self, lhs: T, rhs: T) -> Result<T, ArithmeticError> {
        (self.apply)(lhs, rhs)
    }
}

// Derives would require `T: Clone` etc. even though only the fn
// pointer is stored.
impl<T> Clone for NamedOperator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NamedOperator<T> {}

impl<T> fmt::Debug for NamedOperator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedOperator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for NamedOperator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn add(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    Ok(a + b)
}

fn diff(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    Ok(a - b)
}

fn mult(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    Ok(a * b)
}

/// The quotient is truncated by a cast through `i32`, so it rounds
/// toward zero and saturates at the `i32` bounds.
fn div(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(f64::from((a / b) as i32))
}

/// Addition: `a + b`.
pub const ADD: NamedOperator<f64> = NamedOperator::new("add", add);

/// Subtraction: `a - b`.
pub const DIFF: NamedOperator<f64> = NamedOperator::new("diff", diff);

/// Multiplication: `a * b`.
pub const MULT: NamedOperator<f64> = NamedOperator::new("mult", mult);

/// Truncating division: `a / b` rounded toward zero.
///
/// Fails with [`ArithmeticError::DivisionByZero`] when `b` is zero.
///
/// ```
/// use higher_order::ArithmeticError;
/// use higher_order::DIV;
///
/// assert_eq!(DIV.apply(7.0, 2.0), Ok(3.0));
/// assert_eq!(DIV.apply(-7.0, 2.0), Ok(-3.0));
/// assert_eq!(DIV.apply(1.0, 0.0), Err(ArithmeticError::DivisionByZero));
/// ```
pub const DIV: NamedOperator<f64> = NamedOperator::new("div", div);

/// All built-in operators, in declaration order.
pub const BUILTINS: [NamedOperator<f64>; 4] = [ADD, DIFF, MULT, DIV];

/// Look up a built-in operator by name.
pub fn builtin(name: &str) -> Option<NamedOperator<f64>> {
    BUILTINS.iter().find(|op| op.name() == name).copied()
}

impl FromStr for NamedOperator<f64> {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        builtin(s).ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// Operators serialize as their name.
impl<T> Serialize for NamedOperator<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Only built-in names can be deserialized.
impl<'de> Deserialize<'de> for NamedOperator<f64> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_arithmetic() {
        assert_eq!(ADD.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(DIFF.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(MULT.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(DIV.apply(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn div_truncates_toward_zero() {
        assert_eq!(DIV.apply(7.0, 2.0), Ok(3.0));
        assert_eq!(DIV.apply(-7.0, 2.0), Ok(-3.0));
        assert_eq!(DIV.apply(7.0, -2.0), Ok(-3.0));
        assert_eq!(DIV.apply(1.0, 3.0), Ok(0.0));
        assert_eq!(DIV.apply(6.0, 4.0), Ok(1.0));
    }

    #[test]
    fn div_saturates_at_i32_bounds() {
        assert_eq!(DIV.apply(1e12, 1.0), Ok(f64::from(i32::MAX)));
        assert_eq!(DIV.apply(-1e12, 1.0), Ok(f64::from(i32::MIN)));
    }

    #[test]
    fn div_by_zero_fails() {
        assert_eq!(DIV.apply(1.0, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(DIV.apply(0.0, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(DIV.apply(1.0, -0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn names() {
        let names: Vec<_> = BUILTINS.iter().map(|op| op.name()).collect();
        assert_eq!(names, vec!["add", "diff", "mult", "div"]);
        assert_eq!(MULT.to_string(), "mult");
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(builtin("div").map(|op| op.name()), Some("div"));
        assert!(builtin("subtract").is_none());

        let op: NamedOperator<f64> = "diff".parse().unwrap();
        assert_eq!(op.apply(5.0, 8.0), Ok(-3.0));

        let err = "pow".parse::<NamedOperator<f64>>().unwrap_err();
        assert_eq!(err, UnknownOperator("pow".to_string()));
    }

    #[test]
    fn name_is_informational() {
        const PLUS: NamedOperator<f64> = NamedOperator::new("plus", add);
        assert_eq!(PLUS.apply(1.5, 2.5), ADD.apply(1.5, 2.5));
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&[ADD, DIV]).unwrap();
        assert_eq!(json, r#"["add","div"]"#);

        let ops: Vec<NamedOperator<f64>> = serde_json::from_str(r#"["mult","diff"]"#).unwrap();
        assert_eq!(ops[0].name(), "mult");
        assert_eq!(ops[1].apply(1.0, 4.0), Ok(-3.0));

        assert!(serde_json::from_str::<NamedOperator<f64>>(r#""mod""#).is_err());
    }

    #[test]
    fn generic_over_operand_type() {
        fn concat(a: String, b: String) -> Result<String, ArithmeticError> {
            Ok(a + &b)
        }
        let op = NamedOperator::<String>::new("concat", concat);
        assert_eq!(
            op.apply("foo".to_string(), "bar".to_string()),
            Ok("foobar".to_string())
        );
    }
}
