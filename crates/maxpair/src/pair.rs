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

use crate::{error::PairwiseError, error::ProductOverflowError, num::PairwiseNumeric};

/// The two values picked by a selector, ordered so that `first >= second`.
///
/// # Examples
///
/// ```rust
/// # use maxpair::MaxPair;
/// let pair = MaxPair::new(3_u64, 200_000);
/// assert_eq!(pair.first(), 200_000);
/// assert_eq!(pair.second(), 3);
/// assert_eq!(pair.product(), Ok(600_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxPair<T> {
    first: T,
    second: T,
}

impl<T> MaxPair<T>
where
    T: PairwiseNumeric,
{
    /// Creates a new pair from two values in any order.
    #[inline]
    pub fn new(a: T, b: T) -> Self {
        if a >= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// Returns the larger value.
    #[inline]
    pub fn first(&self) -> T {
        self.first
    }

    /// Returns the smaller value.
    #[inline]
    pub fn second(&self) -> T {
        self.second
    }

    /// Multiplies both values, failing with `PairwiseError::Overflow` if the
    /// product does not fit in `T`.
    #[inline]
    pub fn product(&self) -> Result<T, PairwiseError<T>> {
        self.first
            .checked_mul_val(self.second)
            .ok_or_else(|| ProductOverflowError::new(self.first, self.second).into())
    }
}

impl<T> std::fmt::Display for MaxPair<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
