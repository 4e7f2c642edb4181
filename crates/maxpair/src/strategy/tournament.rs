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

//! Tournament selector.
//!
//! Finds the maximum with a single-elimination tournament and the runner-up
//! among the values the champion eliminated. Entrants are paired left to
//! right in every round; the larger advances (the left entrant on ties) and
//! remembers the loser's value. An odd entrant out gets a bye.
//!
//! Every element other than the champion lost exactly one match. The second
//! largest value either lost to the champion directly or lost to an entrant
//! at least as large that was itself eliminated along a chain ending at the
//! champion; in both cases the champion beat a value no smaller than it. So
//! the runner-up is the maximum of the champion's list.
//!
//! The tournament takes `n - 1` comparisons and the champion played at most
//! `ceil(log2 n)` matches, giving at most `n + ceil(log2 n) - 2` comparisons
//! in total, the lower bound for finding the two largest elements.

use crate::{
    error::{InsufficientLengthError, PairwiseError},
    num::PairwiseNumeric,
    pair::MaxPair,
    selector::PairwiseSelector,
    sequence::NonNegativeSlice,
    stats::SelectionStatistics,
};
use smallvec::SmallVec;
use std::time::Instant;

/// A tournament entrant with the values it has eliminated.
#[derive(Debug, Clone)]
struct Entrant<T> {
    value: T,
    beaten: SmallVec<T, 8>,
}

impl<T> Entrant<T> {
    #[inline(always)]
    fn new(value: T) -> Self {
        Self {
            value,
            beaten: SmallVec::new(),
        }
    }
}

/// Comparison-minimising selector based on a knockout tournament.
#[derive(Debug, Clone)]
pub struct TournamentSelector<T> {
    round: Vec<Entrant<T>>,
    next: Vec<Entrant<T>>,
}

impl<T> Default for TournamentSelector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TournamentSelector<T> {
    /// Creates a new `TournamentSelector`.
    #[inline]
    pub fn new() -> Self {
        Self {
            round: Vec::new(),
            next: Vec::new(),
        }
    }

    /// Creates a new `TournamentSelector` with buffers for sequences of up to
    /// `capacity` elements.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            round: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity.div_ceil(2)),
        }
    }
}

impl<T> TournamentSelector<T>
where
    T: PairwiseNumeric,
{
    /// Plays rounds until one entrant is left; returns the comparisons made.
    fn play(&mut self) -> u64 {
        let mut comparisons = 0_u64;

        while self.round.len() > 1 {
            self.next.clear();

            let mut entrants = self.round.drain(..);
            while let Some(mut left) = entrants.next() {
                match entrants.next() {
                    Some(mut right) => {
                        comparisons += 1;
                        if right.value > left.value {
                            right.beaten.push(left.value);
                            self.next.push(right);
                        } else {
                            left.beaten.push(right.value);
                            self.next.push(left);
                        }
                    }
                    None => self.next.push(left),
                }
            }
            drop(entrants);

            std::mem::swap(&mut self.round, &mut self.next);
        }

        comparisons
    }
}

impl<T> PairwiseSelector<T> for TournamentSelector<T>
where
    T: PairwiseNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "TournamentSelector"
    }

    fn select_with_stats(
        &mut self,
        sequence: &[T],
        stats: &mut SelectionStatistics,
    ) -> Result<MaxPair<T>, PairwiseError<T>> {
        let start = Instant::now();
        let elements = NonNegativeSlice::try_new(sequence)?;
        stats.set_elements(elements.len());

        self.round.clear();
        self.round.extend(elements.iter().map(|&x| Entrant::new(x)));
        stats.add_comparisons(self.play());

        let champion = self
            .round
            .pop()
            .ok_or_else(|| InsufficientLengthError::new(elements.len()))?;

        let mut beaten = champion.beaten.iter().copied();
        let mut runner_up = beaten
            .next()
            .ok_or_else(|| InsufficientLengthError::new(elements.len()))?;
        for x in beaten {
            stats.on_comparison();
            if x > runner_up {
                runner_up = x;
            }
        }

        stats.set_total_time(start.elapsed());
        Ok(MaxPair::new(champion.value, runner_up))
    }
}

impl<T> std::fmt::Display for TournamentSelector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TournamentSelector")
    }
}
