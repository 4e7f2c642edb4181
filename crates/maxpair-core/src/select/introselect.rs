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

//! # Introselect
//!
//! An in-crate introselect. Each round picks a pivot, splits the active range
//! into `< pivot`, `== pivot` and `> pivot` bands (Dutch national flag), and
//! continues only in the band that contains the requested rank. The three-way
//! split keeps inputs with many equal keys (e.g. all zeros) linear.
//!
//! Pivots come from median-of-three while the depth budget lasts. The budget
//! is `2 * floor(log2(n)) + 2` rounds; once it is exhausted every further
//! pivot is a median of medians of groups of five, which bounds the worst case
//! to `O(n)`. Ranges no longer than the insertion threshold are finished by
//! insertion sort.

use crate::select::PartialSelect;
use std::cmp::Ordering;

/// Ranges of at most this many elements are finished with insertion sort.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 16;

const GROUP_SIZE: usize = 5;

/// Introselect partial selection.
///
/// # Examples
///
/// ```rust
/// # use maxpair_core::select::{Introselect, PartialSelect};
/// let mut data: Vec<u32> = (1..=100).rev().collect();
/// let mut introselect = Introselect::new();
/// introselect.select_nth_by(&mut data, 98, |a, b| a.cmp(b));
/// assert_eq!(data[98], 99);
/// assert_eq!(data[99], 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Introselect {
    insertion_threshold: usize,
}

impl Default for Introselect {
    fn default() -> Self {
        Self::new()
    }
}

impl Introselect {
    /// Creates a new `Introselect` with the default insertion threshold.
    #[inline]
    pub fn new() -> Self {
        Self {
            insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
        }
    }

    /// Creates a new `Introselect` that finishes ranges of at most
    /// `insertion_threshold` elements with insertion sort.
    /// A threshold of `0` is treated as `1`.
    #[inline]
    pub fn with_insertion_threshold(insertion_threshold: usize) -> Self {
        Self {
            insertion_threshold: insertion_threshold.max(1),
        }
    }

    /// Returns the insertion threshold.
    #[inline]
    pub fn insertion_threshold(&self) -> usize {
        self.insertion_threshold
    }
}

impl PartialSelect for Introselect {
    #[inline]
    fn name(&self) -> &str {
        "Introselect"
    }

    fn select_nth_by<T, F>(&mut self, data: &mut [T], nth: usize, mut compare: F)
    where
        T: Copy,
        F: FnMut(&T, &T) -> Ordering,
    {
        assert!(
            nth < data.len(),
            "called `Introselect::select_nth_by` with rank {} on a slice of length {}",
            nth,
            data.len()
        );

        let budget = depth_budget(data.len());
        select_range(data, nth, self.insertion_threshold, budget, &mut compare);
    }
}

impl std::fmt::Display for Introselect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Introselect(insertion_threshold: {})",
            self.insertion_threshold
        )
    }
}

/// Number of median-of-three rounds allowed before switching to
/// median-of-medians pivots.
#[inline(always)]
fn depth_budget(len: usize) -> u32 {
    2 * len.max(1).ilog2() + 2
}

/// Core selection loop over `data[lo..hi]`, narrowing towards `nth`.
///
/// # Invariants
///
/// - `nth < data.len()` and `threshold >= 1`.
/// - `lo <= nth < hi` holds on every iteration.
fn select_range<T, F>(
    data: &mut [T],
    nth: usize,
    threshold: usize,
    mut budget: u32,
    compare: &mut F,
) where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(nth < data.len());
    debug_assert!(threshold >= 1);

    let mut lo = 0;
    let mut hi = data.len();

    loop {
        let range = &mut data[lo..hi];
        if range.len() <= threshold {
            insertion_sort(range, compare);
            return;
        }

        let pivot_index = if budget == 0 {
            median_of_medians(range, threshold, compare)
        } else {
            budget -= 1;
            median_of_three(range, compare)
        };

        let pivot = range[pivot_index];
        let (lt, gt) = partition_three_way(range, pivot, compare);
        let (lt, gt) = (lo + lt, lo + gt);

        if nth < lt {
            hi = lt;
        } else if nth >= gt {
            lo = gt;
        } else {
            return;
        }
    }
}

/// Returns the index of the median of the first, middle and last element.
#[inline]
fn median_of_three<T, F>(data: &[T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(!data.is_empty());

    let (a, b, c) = (0, data.len() / 2, data.len() - 1);
    let ab = compare(&data[a], &data[b]) == Ordering::Less;
    let bc = compare(&data[b], &data[c]) == Ordering::Less;
    if ab == bc {
        return b;
    }

    let ac = compare(&data[a], &data[c]) == Ordering::Less;
    if ab == ac { c } else { a }
}

/// Moves the medians of all groups of five to the front of `data` and
/// selects their median in place. Returns its index.
fn median_of_medians<T, F>(data: &mut [T], threshold: usize, compare: &mut F) -> usize
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    let groups = len.div_ceil(GROUP_SIZE);

    for group in 0..groups {
        let start = group * GROUP_SIZE;
        let end = (start + GROUP_SIZE).min(len);
        insertion_sort(&mut data[start..end], compare);
        // `group <= start`, and slots before `group` already hold medians.
        data.swap(group, start + (end - start) / 2);
    }

    let mid = groups / 2;
    select_range(&mut data[..groups], mid, threshold, 0, compare);
    mid
}

/// Three-way partition around `pivot`.
///
/// Returns `(lt, gt)` such that `data[..lt] < pivot`, `data[lt..gt] == pivot`
/// and `data[gt..] > pivot`. The middle band is non-empty when `pivot` is an
/// element of `data`.
#[inline]
fn partition_three_way<T, F>(data: &mut [T], pivot: T, compare: &mut F) -> (usize, usize)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut lt = 0;
    let mut i = 0;
    let mut gt = data.len();

    while i < gt {
        match compare(&data[i], &pivot) {
            Ordering::Less => {
                data.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                data.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    (lt, gt)
}

#[inline]
fn insertion_sort<T, F>(data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && compare(&data[j - 1], &data[j]) == Ordering::Greater {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}
