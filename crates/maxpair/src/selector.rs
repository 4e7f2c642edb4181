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

//! The common contract of all maximum-pair strategies.
//!
//! A `PairwiseSelector` reads a sequence, validates it, and returns the two
//! values whose product is the maximum pairwise product. Strategies differ
//! only in how they find those values and in the work they record in
//! `SelectionStatistics`. Selectors take `&mut self` so that strategies with
//! scratch buffers can reuse them across calls; the input is never mutated.

use crate::{error::PairwiseError, num::PairwiseNumeric, pair::MaxPair, stats::SelectionStatistics};

/// A strategy computing the maximum pairwise product of a sequence.
pub trait PairwiseSelector<T>
where
    T: PairwiseNumeric,
{
    /// Returns the name of the selector.
    fn name(&self) -> &str;

    /// Selects the pair with the maximum product and records the work done
    /// in `stats`.
    ///
    /// Fails if the sequence has fewer than two elements, holds a negative
    /// element, or (for strategies that multiply while searching) if a
    /// product overflows `T`.
    fn select_with_stats(
        &mut self,
        sequence: &[T],
        stats: &mut SelectionStatistics,
    ) -> Result<MaxPair<T>, PairwiseError<T>>;

    /// Selects the pair with the maximum product.
    #[inline]
    fn select(&mut self, sequence: &[T]) -> Result<MaxPair<T>, PairwiseError<T>> {
        let mut stats = SelectionStatistics::default();
        self.select_with_stats(sequence, &mut stats)
    }

    /// Returns the maximum pairwise product of `sequence`.
    #[inline]
    fn max_pairwise_product(&mut self, sequence: &[T]) -> Result<T, PairwiseError<T>> {
        self.select(sequence)?.product()
    }
}
