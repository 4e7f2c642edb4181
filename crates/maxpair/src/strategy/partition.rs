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

//! Partition-based selector.
//!
//! Copies the sequence into a reusable scratch buffer and asks a partial
//! selection primitive for rank `n - 2` in ascending order. Afterwards the
//! last two positions of the buffer hold the two largest values; the rest of
//! the buffer is left in unspecified order. The selection primitive is a type
//! parameter, so the in-crate `Introselect` and the standard library's
//! `select_nth_unstable_by` (`StdSelect`) can be swapped without touching the
//! selector.

use crate::{
    error::PairwiseError, num::PairwiseNumeric, pair::MaxPair, selector::PairwiseSelector,
    sequence::NonNegativeSlice, stats::SelectionStatistics,
};
use maxpair_core::select::{Introselect, PartialSelect};
use std::time::Instant;

/// Selector based on partial selection of the top two ranks.
///
/// # Examples
///
/// ```rust
/// # use maxpair::{PairwiseSelector, PartitionSelector};
/// # use maxpair_core::select::StdSelect;
/// let mut selector = PartitionSelector::<u64>::new();
/// assert_eq!(selector.max_pairwise_product(&[1, 2, 3]), Ok(6));
///
/// let mut selector = PartitionSelector::<u64, StdSelect>::with_select(StdSelect);
/// assert_eq!(selector.max_pairwise_product(&[100, 1, 1, 100]), Ok(10_000));
/// ```
#[derive(Debug, Clone)]
pub struct PartitionSelector<T, S = Introselect> {
    select: S,
    scratch: Vec<T>,
}

impl<T> PartitionSelector<T, Introselect> {
    /// Creates a new `PartitionSelector` backed by `Introselect`.
    #[inline]
    pub fn new() -> Self {
        Self::with_select(Introselect::new())
    }

    /// Creates a new `PartitionSelector` backed by `Introselect`, with a
    /// scratch buffer for sequences of up to `capacity` elements.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            select: Introselect::new(),
            scratch: Vec::with_capacity(capacity),
        }
    }
}

impl<T> Default for PartitionSelector<T, Introselect> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> PartitionSelector<T, S>
where
    S: PartialSelect,
{
    /// Creates a new `PartitionSelector` backed by the given primitive.
    #[inline]
    pub fn with_select(select: S) -> Self {
        Self {
            select,
            scratch: Vec::new(),
        }
    }
}

impl<T, S> PairwiseSelector<T> for PartitionSelector<T, S>
where
    T: PairwiseNumeric,
    S: PartialSelect,
{
    #[inline]
    fn name(&self) -> &str {
        "PartitionSelector"
    }

    fn select_with_stats(
        &mut self,
        sequence: &[T],
        stats: &mut SelectionStatistics,
    ) -> Result<MaxPair<T>, PairwiseError<T>> {
        let start = Instant::now();
        let elements = NonNegativeSlice::try_new(sequence)?;
        stats.set_elements(elements.len());

        self.scratch.clear();
        self.scratch.extend_from_slice(elements.as_slice());

        let n = self.scratch.len();
        let mut comparisons = 0_u64;
        self.select.select_nth_by(&mut self.scratch, n - 2, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        stats.add_comparisons(comparisons);

        stats.set_total_time(start.elapsed());
        Ok(MaxPair::new(self.scratch[n - 2], self.scratch[n - 1]))
    }
}

impl<T, S> std::fmt::Display for PartitionSelector<T, S>
where
    S: PartialSelect,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PartitionSelector({})", self.select.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NegativeElementError, ProductOverflowError};
    use maxpair_core::select::StdSelect;

    type Outcome = Result<u64, PairwiseError<u64>>;

    fn both_primitives(sequence: &[u64]) -> (Outcome, Outcome) {
        let intro = PartitionSelector::new().max_pairwise_product(sequence);
        let std_select =
            PartitionSelector::with_select(StdSelect).max_pairwise_product(sequence);
        (intro, std_select)
    }

    fn assert_product(sequence: &[u64], expected: u64) {
        let (intro, std_select) = both_primitives(sequence);
        assert_eq!(intro, Ok(expected), "Introselect on {:?}", sequence);
        assert_eq!(std_select, Ok(expected), "StdSelect on {:?}", sequence);
    }

    #[test]
    fn test_scenarios() {
        assert_product(&[1, 2, 3], 6);
        assert_product(&[100, 1, 1, 100], 10_000);
        assert_product(&[0, 0, 0], 0);
        assert_product(&[5, 5, 3], 25);
        assert_product(&[2, 3], 6);
        assert_product(&[3, 2], 6);
    }

    #[test]
    fn test_large_range() {
        let sequence: Vec<u64> = (1..=200_000).collect();
        assert_product(&sequence, 39_999_800_000);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let sequence = vec![4_u64, 9, 1, 7];
        let mut selector = PartitionSelector::preallocated(sequence.len());
        let pair = selector.select(&sequence).unwrap();
        assert_eq!((pair.first(), pair.second()), (9, 7));
        assert_eq!(sequence, vec![4, 9, 1, 7]);
    }

    #[test]
    fn test_scratch_is_reused_across_calls() {
        let mut selector = PartitionSelector::<u64>::preallocated(8);
        assert_eq!(selector.max_pairwise_product(&[1, 2, 3, 4, 5, 6, 7, 8]), Ok(56));
        assert_eq!(selector.max_pairwise_product(&[2, 3]), Ok(6));
        assert_eq!(selector.max_pairwise_product(&[10, 0, 10]), Ok(100));
    }

    #[test]
    fn test_counts_comparisons() {
        let sequence: Vec<u64> = (0..100).rev().collect();
        let mut stats = SelectionStatistics::default();
        PartitionSelector::new()
            .select_with_stats(&sequence, &mut stats)
            .unwrap();
        assert_eq!(stats.elements, 100);
        assert!(stats.comparisons >= 99);
        assert_eq!(stats.products, 0);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let (intro, std_select) = both_primitives(&[7]);
        assert!(matches!(intro, Err(PairwiseError::InsufficientLength(_))));
        assert!(matches!(std_select, Err(PairwiseError::InsufficientLength(_))));
        assert_eq!(
            PartitionSelector::new().max_pairwise_product(&[-4_i64, 2]),
            Err(PairwiseError::NegativeElement(NegativeElementError::new(0, -4)))
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            PartitionSelector::new().max_pairwise_product(&[2_u8, u8::MAX, 1]),
            Err(PairwiseError::Overflow(ProductOverflowError::new(u8::MAX, 2)))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PartitionSelector::<u64>::new().to_string(),
            "PartitionSelector(Introselect)"
        );
        assert_eq!(
            PartitionSelector::<u64, StdSelect>::with_select(StdSelect).to_string(),
            "PartitionSelector(StdSelect)"
        );
    }
}
