// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Partial Selection
//!
//! Selection places the element of rank `nth` (zero-based, ascending under a
//! caller-supplied comparator) at index `nth`, with every element before it
//! not greater and every element after it not smaller. The remaining order is
//! unspecified. This is the building block for "top `k`" queries that do not
//! need a full sort.
//!
//! Two interchangeable primitives implement `PartialSelect`:
//!
//! - `Introselect`: quickselect with median-of-three pivots and three-way
//!   partitioning, falling back to median-of-medians pivots once its depth
//!   budget runs out. Small ranges are finished with insertion sort.
//! - `StdSelect`: delegates to `slice::select_nth_unstable_by`.
//!
//! Comparators are `FnMut`, so callers can count comparisons without
//! interior mutability.

pub mod introselect;

pub use introselect::Introselect;

use std::cmp::Ordering;

/// A partial-selection primitive.
pub trait PartialSelect {
    /// Returns the name of the selection primitive.
    fn name(&self) -> &str;

    /// Reorders `data` so that the element at `nth` is the one that would be
    /// there after sorting by `compare`. Elements in `data[..nth]` compare
    /// less than or equal to it, elements in `data[nth + 1..]` greater than or
    /// equal to it.
    ///
    /// # Panics
    ///
    /// Panics if `nth >= data.len()`.
    fn select_nth_by<T, F>(&mut self, data: &mut [T], nth: usize, compare: F)
    where
        T: Copy,
        F: FnMut(&T, &T) -> Ordering;
}

/// Partial selection backed by the standard library.
///
/// # Examples
///
/// ```rust
/// # use maxpair_core::select::{PartialSelect, StdSelect};
/// let mut data = [9, 1, 8, 2, 7];
/// StdSelect.select_nth_by(&mut data, 3, |a, b| a.cmp(b));
/// assert_eq!(data[3], 8);
/// assert_eq!(data[4], 9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StdSelect;

impl PartialSelect for StdSelect {
    #[inline]
    fn name(&self) -> &str {
        "StdSelect"
    }

    #[inline]
    fn select_nth_by<T, F>(&mut self, data: &mut [T], nth: usize, compare: F)
    where
        T: Copy,
        F: FnMut(&T, &T) -> Ordering,
    {
        assert!(
            nth < data.len(),
            "called `StdSelect::select_nth_by` with rank {} on a slice of length {}",
            nth,
            data.len()
        );
        data.select_nth_unstable_by(nth, compare);
    }
}

impl std::fmt::Display for StdSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StdSelect")
    }
}
