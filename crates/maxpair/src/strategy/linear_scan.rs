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

//! Linear-scan selector.
//!
//! A single pass that keeps the two largest values seen so far in an explicit
//! `TopTwo` state. The state starts `Empty`, becomes `One` after the first
//! element and `Two` after the second, so no numeric sentinel is needed.
//!
//! For every further element `x` with running `first >= second`:
//!
//! - `x > second` and `x >= first`: shift, `first = x`, `second = old first`;
//! - `x > second` and `x < first`: replace `second = x`;
//! - otherwise: no change.
//!
//! Shifting on `x >= first` keeps a duplicated maximum in both slots, so
//! `[5, 5, 3]` yields `(5, 5)`. Each element costs at most two comparisons.

use crate::{
    error::{InsufficientLengthError, PairwiseError},
    num::PairwiseNumeric,
    pair::MaxPair,
    selector::PairwiseSelector,
    sequence::NonNegativeSlice,
    stats::SelectionStatistics,
};
use std::time::Instant;

/// The running two largest values of a scanned prefix.
///
/// # Examples
///
/// ```rust
/// # use maxpair::strategy::linear_scan::TopTwo;
/// let mut top = TopTwo::Empty;
/// for x in [3_u32, 8, 1, 8] {
///     top.observe(x);
/// }
/// assert_eq!(top, TopTwo::Two { first: 8, second: 8 });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TopTwo<T> {
    /// Nothing observed yet.
    #[default]
    Empty,
    /// Exactly one element observed.
    One(T),
    /// At least two elements observed, `first >= second`.
    Two { first: T, second: T },
}

impl<T> TopTwo<T>
where
    T: PairwiseNumeric,
{
    /// Feeds `x` into the state and returns the number of comparisons made
    /// (at most two).
    #[inline(always)]
    pub fn observe(&mut self, x: T) -> u64 {
        let (next, comparisons) = match *self {
            Self::Empty => (Self::One(x), 0),
            Self::One(first) => {
                if x >= first {
                    (Self::Two { first: x, second: first }, 1)
                } else {
                    (Self::Two { first, second: x }, 1)
                }
            }
            Self::Two { first, second } => {
                if x > second {
                    if x >= first {
                        (Self::Two { first: x, second: first }, 2)
                    } else {
                        (Self::Two { first, second: x }, 2)
                    }
                } else {
                    return 1;
                }
            }
        };
        *self = next;
        comparisons
    }

    /// Returns the pair once two elements have been observed.
    #[inline]
    pub fn pair(&self) -> Option<MaxPair<T>> {
        match *self {
            Self::Two { first, second } => Some(MaxPair::new(first, second)),
            _ => None,
        }
    }
}

/// One-pass selector tracking the two largest values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LinearScanSelector;

impl LinearScanSelector {
    /// Creates a new `LinearScanSelector`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> PairwiseSelector<T> for LinearScanSelector
where
    T: PairwiseNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "LinearScanSelector"
    }

    fn select_with_stats(
        &mut self,
        sequence: &[T],
        stats: &mut SelectionStatistics,
    ) -> Result<MaxPair<T>, PairwiseError<T>> {
        let start = Instant::now();
        let elements = NonNegativeSlice::try_new(sequence)?;
        stats.set_elements(elements.len());

        let mut top = TopTwo::Empty;
        let mut comparisons = 0_u64;
        for &x in elements.iter() {
            comparisons += top.observe(x);
        }
        stats.add_comparisons(comparisons);

        stats.set_total_time(start.elapsed());
        top.pair()
            .ok_or_else(|| InsufficientLengthError::new(elements.len()).into())
    }
}

impl std::fmt::Display for LinearScanSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LinearScanSelector")
    }
}
