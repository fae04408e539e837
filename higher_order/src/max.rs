/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

/// Find the largest element of `items`.
///
/// An element replaces the current maximum only when it compares
/// strictly greater, so ties resolve to the earliest element and
/// incomparable values (such as `NaN`) are skipped unless they come
/// first. Returns `None` for an empty slice.
///
/// ```
/// use higher_order::maximum;
///
/// assert_eq!(maximum(&[3, 9, 2]), Some(&9));
/// assert_eq!(maximum::<i32>(&[]), None);
/// ```
pub fn maximum<T: PartialOrd>(items: &[T]) -> Option<&T> {
    let (first, rest) = items.split_first()?;
    Some(rest.iter().fold(first, |max, x| if x > max { x } else { max }))
}
