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

//! Brute-force selector.
//!
//! Enumerates every unordered pair of distinct positions `(i, j)` with
//! `i < j` and keeps the pair with the largest product. This is quadratic in
//! the input length and only meant as the correctness oracle for the other
//! strategies.

use crate::{
    error::{InsufficientLengthError, PairwiseError, ProductOverflowError},
    num::PairwiseNumeric,
    pair::MaxPair,
    selector::PairwiseSelector,
    sequence::NonNegativeSlice,
    stats::SelectionStatistics,
};
use std::time::Instant;

/// Input length beyond which the brute-force selector becomes impractical
/// (`n = 10^4` already means about `5 * 10^7` products).
pub const BRUTE_FORCE_PRACTICAL_LIMIT: usize = 10_000;

/// Quadratic reference selector over all pairs.
///
/// Every product is computed with checked multiplication. For non-negative
/// input the maximum product bounds every other product, so an overflow on
/// any pair means the answer itself does not fit in `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BruteForceSelector;

impl BruteForceSelector {
    /// Creates a new `BruteForceSelector`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> PairwiseSelector<T> for BruteForceSelector
where
    T: PairwiseNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "BruteForceSelector"
    }

    fn select_with_stats(
        &mut self,
        sequence: &[T],
        stats: &mut SelectionStatistics,
    ) -> Result<MaxPair<T>, PairwiseError<T>> {
        let start = Instant::now();
        let elements = NonNegativeSlice::try_new(sequence)?.as_slice();
        stats.set_elements(elements.len());

        let mut best: Option<(T, usize, usize)> = None;
        for i in 0..elements.len() {
            for j in (i + 1)..elements.len() {
                let (a, b) = (elements[i], elements[j]);
                stats.on_product();
                let product = a.checked_mul_val(b).ok_or_else(|| {
                    let pair = MaxPair::new(a, b);
                    ProductOverflowError::new(pair.first(), pair.second())
                })?;

                match best {
                    None => best = Some((product, i, j)),
                    Some((best_product, _, _)) => {
                        stats.on_comparison();
                        if product > best_product {
                            best = Some((product, i, j));
                        }
                    }
                }
            }
        }

        stats.set_total_time(start.elapsed());
        best.map(|(_, i, j)| MaxPair::new(elements[i], elements[j]))
            .ok_or_else(|| InsufficientLengthError::new(elements.len()).into())
    }
}

impl std::fmt::Display for BruteForceSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BruteForceSelector")
    }
}
