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

//! Maximum-pair strategies.
//!
//! - `brute_force`: all unordered pairs, quadratic, the correctness oracle.
//! - `linear_scan`: one pass over the input with an explicit `TopTwo` state.
//! - `partition`: partial selection of the top two ranks through a pluggable
//!   `PartialSelect` primitive.
//! - `tournament`: knockout tournament using the fewest comparisons.
//!
//! `Strategy` names each of them, parses from and prints as kebab-case, and
//! dispatches to a freshly constructed selector. The `max_pairwise*` free
//! functions are shorthands for one-off calls.

pub mod brute_force;
pub mod linear_scan;
pub mod partition;
pub mod tournament;

use crate::{
    error::PairwiseError, num::PairwiseNumeric, pair::MaxPair, selector::PairwiseSelector,
    stats::SelectionStatistics,
};
use brute_force::BruteForceSelector;
use linear_scan::LinearScanSelector;
use partition::PartitionSelector;
use std::str::FromStr;
use tournament::TournamentSelector;

/// The available maximum-pair strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// All unordered pairs, `O(n^2)`.
    BruteForce,
    /// One pass keeping the two largest values, `O(n)`.
    LinearScan,
    /// Partial selection of the top two ranks, `O(n)` expected.
    Partition,
    /// Knockout tournament, `n + ceil(log2 n) - 2` comparisons.
    Tournament,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::BruteForce,
        Strategy::LinearScan,
        Strategy::Partition,
        Strategy::Tournament,
    ];

    /// Returns the kebab-case name of the strategy.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::LinearScan => "linear-scan",
            Strategy::Partition => "partition",
            Strategy::Tournament => "tournament",
        }
    }

    /// Runs the strategy on `sequence`, recording the work done in `stats`.
    pub fn select_with_stats<T>(
        &self,
        sequence: &[T],
        stats: &mut SelectionStatistics,
    ) -> Result<MaxPair<T>, PairwiseError<T>>
    where
        T: PairwiseNumeric,
    {
        match self {
            Strategy::BruteForce => BruteForceSelector::new().select_with_stats(sequence, stats),
            Strategy::LinearScan => LinearScanSelector::new().select_with_stats(sequence, stats),
            Strategy::Partition => {
                PartitionSelector::preallocated(sequence.len()).select_with_stats(sequence, stats)
            }
            Strategy::Tournament => {
                TournamentSelector::preallocated(sequence.len()).select_with_stats(sequence, stats)
            }
        }
    }

    /// Returns the maximum pairwise product of `sequence` using this strategy.
    #[inline]
    pub fn max_pairwise_product<T>(&self, sequence: &[T]) -> Result<T, PairwiseError<T>>
    where
        T: PairwiseNumeric,
    {
        let mut stats = SelectionStatistics::default();
        self.select_with_stats(sequence, &mut stats)?.product()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseStrategyError {
    /// The name that could not be parsed.
    pub name: String,
}

impl std::fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown strategy '{}', expected one of: ", self.name)?;
        for (i, strategy) in Strategy::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", strategy)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| ParseStrategyError { name: s.to_string() })
    }
}

/// Maximum pairwise product by brute force over all pairs.
///
/// # Examples
///
/// ```rust
/// # use maxpair::max_pairwise_naive;
/// assert_eq!(max_pairwise_naive(&[1_u64, 2, 3]), Ok(6));
/// ```
pub fn max_pairwise_naive<T>(sequence: &[T]) -> Result<T, PairwiseError<T>>
where
    T: PairwiseNumeric,
{
    BruteForceSelector::new().max_pairwise_product(sequence)
}

/// Maximum pairwise product by a single linear scan. The recommended default.
///
/// # Examples
///
/// ```rust
/// # use maxpair::max_pairwise;
/// assert_eq!(max_pairwise(&[100_u64, 1, 1, 100]), Ok(10_000));
/// ```
pub fn max_pairwise<T>(sequence: &[T]) -> Result<T, PairwiseError<T>>
where
    T: PairwiseNumeric,
{
    LinearScanSelector::new().max_pairwise_product(sequence)
}

/// Maximum pairwise product by introselect partial selection.
pub fn max_pairwise_partition<T>(sequence: &[T]) -> Result<T, PairwiseError<T>>
where
    T: PairwiseNumeric,
{
    PartitionSelector::preallocated(sequence.len()).max_pairwise_product(sequence)
}

/// Maximum pairwise product by knockout tournament.
pub fn max_pairwise_tournament<T>(sequence: &[T]) -> Result<T, PairwiseError<T>>
where
    T: PairwiseNumeric,
{
    TournamentSelector::preallocated(sequence.len()).max_pairwise_product(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
            assert_eq!(strategy.to_string(), strategy.name());
        }
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_underscores() {
        assert_eq!("Linear_Scan".parse::<Strategy>(), Ok(Strategy::LinearScan));
        assert_eq!(" BRUTE-FORCE ".parse::<Strategy>(), Ok(Strategy::BruteForce));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bogo".parse::<Strategy>().unwrap_err();
        assert_eq!(err.name, "bogo");
        assert_eq!(
            err.to_string(),
            "Unknown strategy 'bogo', expected one of: brute-force, linear-scan, partition, tournament"
        );
    }

    #[test]
    fn test_dispatch() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.max_pairwise_product(&[1_u64, 2, 3]), Ok(6), "{}", strategy);
            assert!(matches!(
                strategy.max_pairwise_product(&[7_u64]),
                Err(PairwiseError::InsufficientLength(_))
            ));
        }
    }

    #[test]
    fn test_dispatch_records_elements() {
        for strategy in Strategy::ALL {
            let mut stats = SelectionStatistics::default();
            strategy
                .select_with_stats(&[4_u32, 1, 3], &mut stats)
                .unwrap();
            assert_eq!(stats.elements, 3, "{}", strategy);
        }
    }

    #[test]
    fn test_free_functions() {
        let sequence = [5_u64, 5, 3];
        assert_eq!(max_pairwise_naive(&sequence), Ok(25));
        assert_eq!(max_pairwise(&sequence), Ok(25));
        assert_eq!(max_pairwise_partition(&sequence), Ok(25));
        assert_eq!(max_pairwise_tournament(&sequence), Ok(25));
    }
}
