/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Function composition.
//!
//! Laws (for pure functions):
//!
//! - **Definition**: `compose(f, g)(x) == f(g(x))`
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Identity**: `compose(id, f) == f == compose(f, id)`

/// Compose two functions right to left: the result maps `x` to
/// `f(g(x))`.
///
/// Errors are values: if `g` or `f` return a `Result`, it passes
/// through unchanged.
///
/// # Example
///
/// ```
/// use higher_order::compose;
///
/// let h = compose(f64::sin, f64::cos);
/// assert!((h(5.0) - 0.279873).abs() < 1e-5);
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Compose two functions left to right: `g` runs first, then `f`.
///
/// `and_then(g, f)` is the same function as `compose(f, g)`.
///
/// ```
/// use higher_order::and_then;
///
/// let parse_then_double = and_then(|s: &str| s.len(), |n: usize| n * 2);
/// assert_eq!(parse_then_double("abc"), 6);
/// ```
pub fn and_then<A, B, C, G, F>(g: G, f: F) -> impl Fn(A) -> C
where
    G: Fn(A) -> B,
    F: Fn(B) -> C,
{
    compose(f, g)
}

/// Compose any number of functions, right to left.
///
/// - `compose!(f)` is `f`
/// - `compose!(f, g)` is `|x| f(g(x))`
/// - `compose!(f, g, h)` is `|x| f(g(h(x)))`
///
/// ```
/// use higher_order::compose;
///
/// fn add_one(x: i32) -> i32 {
///     x + 1
/// }
/// fn double(x: i32) -> i32 {
///     x * 2
/// }
/// fn square(x: i32) -> i32 {
///     x * x
/// }
///
/// // add_one(double(square(3)))
/// assert_eq!(compose!(add_one, double, square)(3), 19);
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose($f, $crate::compose!($($rest),+))
    };
}
