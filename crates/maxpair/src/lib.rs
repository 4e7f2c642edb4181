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

//! # Maxpair
//!
//! Maximum pairwise product of a sequence of non-negative integers: the
//! largest value of `a * b` for two elements taken from distinct positions.
//! The crate offers several interchangeable strategies behind one contract,
//! the `PairwiseSelector` trait, so their running time and comparison counts
//! can be contrasted on the same inputs.
//!
//! ## Strategies
//!
//! - `BruteForceSelector`: every unordered pair, `O(n^2)`. The correctness oracle.
//! - `LinearScanSelector`: one pass keeping the two largest values seen,
//!   at most two comparisons per element. The recommended default.
//! - `PartitionSelector`: partial selection of the top two ranks with a
//!   pluggable primitive from `maxpair_core::select`, `O(n)` expected.
//! - `TournamentSelector`: knockout tournament, at most
//!   `n + ceil(log2 n) - 2` comparisons.
//!
//! ## Contract
//!
//! Inputs must hold at least two elements and no negative values. Violations
//! are reported as `PairwiseError`, as are products that overflow the element
//! type. Choose an element type wide enough for the expected products
//! (`u64` comfortably covers inputs up to `2^32`).
//!
//! ```rust
//! use maxpair::max_pairwise;
//!
//! let sequence: Vec<u64> = (1..=200_000).collect();
//! assert_eq!(max_pairwise(&sequence), Ok(39_999_800_000));
//! ```

pub mod error;
pub mod num;
pub mod pair;
pub mod selector;
pub mod sequence;
pub mod stats;
pub mod strategy;

pub use error::PairwiseError;
pub use pair::MaxPair;
pub use selector::PairwiseSelector;
pub use sequence::NonNegativeSlice;
pub use stats::SelectionStatistics;
pub use strategy::{
    Strategy, brute_force::BruteForceSelector, linear_scan::LinearScanSelector,
    max_pairwise, max_pairwise_naive, max_pairwise_partition, max_pairwise_tournament,
    partition::PartitionSelector, tournament::TournamentSelector,
};
