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

//! Statistics reporting for selector runs.
//!
//! A `SelectionStatistics` records how much work a strategy did on one input:
//! the input length, the number of comparisons between candidate values, the
//! number of products evaluated, and the wall-clock time. Counters use
//! saturating arithmetic so the hot loops never trap, and the `Display`
//! rendering gives a compact report for side-by-side comparisons.

use maxpair_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionStatistics {
    /// Number of elements in the input sequence.
    pub elements: u64,

    /// Number of comparisons between candidate values.
    pub comparisons: u64,

    /// Number of products evaluated.
    pub products: u64,

    /// Total time taken by the selector.
    pub time_total: Duration,
}

impl Default for SelectionStatistics {
    fn default() -> Self {
        Self {
            elements: 0,
            comparisons: 0,
            products: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl SelectionStatistics {
    /// Records the input length.
    #[inline]
    pub fn set_elements(&mut self, elements: usize) {
        self.elements = elements as u64;
    }

    /// Called for every comparison between candidate values.
    #[inline(always)]
    pub fn on_comparison(&mut self) {
        self.comparisons = self.comparisons.saturating_add_val(1);
    }

    /// Adds a batch of comparisons counted elsewhere.
    #[inline]
    pub fn add_comparisons(&mut self, comparisons: u64) {
        self.comparisons = self.comparisons.saturating_add_val(comparisons);
    }

    /// Called for every product evaluated.
    #[inline(always)]
    pub fn on_product(&mut self) {
        self.products = self.products.saturating_add_val(1);
    }

    /// Sets the total time taken by the selector.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Average number of comparisons per input element.
    #[inline]
    pub fn comparisons_per_element(&self) -> f64 {
        if self.elements == 0 {
            return 0.0;
        }
        self.comparisons as f64 / self.elements as f64
    }
}

impl std::fmt::Display for SelectionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Maxpair Selection Statistics:")?;
        writeln!(f, "   Elements:             {}", self.elements)?;
        writeln!(f, "   Comparisons:          {}", self.comparisons)?;
        writeln!(f, "   Comparisons/Element:  {:.3}", self.comparisons_per_element())?;
        writeln!(f, "   Products:             {}", self.products)?;
        writeln!(f, "   Total Time:           {:?}", self.time_total)?;
        Ok(())
    }
}
