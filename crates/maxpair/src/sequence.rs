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

//! Validated view of a non-negative integer sequence.
//!
//! `NonNegativeSlice` borrows the caller's slice and guarantees two facts for
//! its lifetime: it holds at least two elements, and none of them is negative.
//! Selectors build one before doing any work, so both preconditions are
//! reported as `PairwiseError` instead of producing a meaningless product.

use crate::{
    error::{InsufficientLengthError, NegativeElementError, PairwiseError},
    num::PairwiseNumeric,
};

/// A borrowed sequence with at least two elements, none of them negative.
///
/// # Examples
///
/// ```rust
/// # use maxpair::NonNegativeSlice;
/// let data = [3_i32, 0, 9];
/// let slice = NonNegativeSlice::try_new(&data).unwrap();
/// assert_eq!(slice.len(), 3);
///
/// assert!(NonNegativeSlice::try_new(&[7_i32]).is_err());
/// assert!(NonNegativeSlice::try_new(&[1_i32, -1]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonNegativeSlice<'a, T> {
    elements: &'a [T],
}

impl<'a, T> NonNegativeSlice<'a, T>
where
    T: PairwiseNumeric,
{
    /// The minimal number of elements needed to form a pair.
    pub const MIN_LEN: usize = 2;

    /// Validates `elements` and wraps them.
    ///
    /// Fails with `PairwiseError::InsufficientLength` if fewer than
    /// `MIN_LEN` elements are given, or with `PairwiseError::NegativeElement`
    /// for the first negative element.
    pub fn try_new(elements: &'a [T]) -> Result<Self, PairwiseError<T>> {
        if elements.len() < Self::MIN_LEN {
            return Err(InsufficientLengthError::new(elements.len()).into());
        }

        if let Some((index, &value)) = elements
            .iter()
            .enumerate()
            .find(|&(_, &value)| value < T::ZERO)
        {
            return Err(NegativeElementError::new(index, value).into());
        }

        Ok(Self { elements })
    }

    /// Returns the underlying slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.elements
    }

    /// Returns the number of elements, always at least `MIN_LEN`.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for NonNegativeSlice<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        let data: [u64; 0] = [];
        assert_eq!(
            NonNegativeSlice::try_new(&data),
            Err(PairwiseError::InsufficientLength(InsufficientLengthError::new(0)))
        );
    }

    #[test]
    fn test_rejects_single_element() {
        assert_eq!(
            NonNegativeSlice::try_new(&[7_u64]),
            Err(PairwiseError::InsufficientLength(InsufficientLengthError::new(1)))
        );
    }

    #[test]
    fn test_rejects_first_negative_element() {
        let data = [4_i64, 0, -2, -9];
        assert_eq!(
            NonNegativeSlice::try_new(&data),
            Err(PairwiseError::NegativeElement(NegativeElementError::new(2, -2)))
        );
    }

    #[test]
    fn test_length_checked_before_sign() {
        let data = [-1_i32];
        assert!(matches!(
            NonNegativeSlice::try_new(&data),
            Err(PairwiseError::InsufficientLength(_))
        ));
    }

    #[test]
    fn test_accepts_zeros_and_unsigned() {
        let zeros = [0_i32, 0];
        let slice = NonNegativeSlice::try_new(&zeros).unwrap();
        assert_eq!(slice.as_slice(), &zeros);
        assert!(!slice.is_empty());

        let unsigned = [u8::MAX, 1, 2];
        let slice = NonNegativeSlice::try_new(&unsigned).unwrap();
        assert_eq!(slice.len(), 3);
        assert_eq!(slice.iter().copied().max(), Some(u8::MAX));
        assert_eq!(slice.into_iter().count(), 3);
    }
}
