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

//! Error types for the maximum pairwise product.
//!
//! Every strategy reports the same three failures: an input too short to form
//! a pair, a negative element, and a product that does not fit in the element
//! type. Each failure carries a small detail struct so callers can point at
//! the offending index or operands.

use std::fmt::Display;

/// The error type for all pairwise selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PairwiseError<T> {
    /// The sequence holds fewer than two elements.
    InsufficientLength(InsufficientLengthError),
    /// The sequence holds a negative element.
    NegativeElement(NegativeElementError<T>),
    /// The product of the two selected elements overflows `T`.
    Overflow(ProductOverflowError<T>),
}

/// Details about a sequence that is too short to form a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsufficientLengthError {
    /// The length of the rejected sequence.
    pub len: usize,
}

impl InsufficientLengthError {
    #[inline]
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl std::fmt::Display for InsufficientLengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A pair needs at least 2 elements, but the sequence has {}",
            self.len
        )
    }
}

impl std::error::Error for InsufficientLengthError {}

/// Details about the first negative element found in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NegativeElementError<T> {
    /// The position of the offending element.
    pub index: usize,
    /// The offending value.
    pub value: T,
}

impl<T> NegativeElementError<T> {
    #[inline]
    pub fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }
}

impl<T> std::fmt::Display for NegativeElementError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Element {} at index {} is negative",
            self.value, self.index
        )
    }
}

impl<T> std::error::Error for NegativeElementError<T> where T: std::fmt::Debug + Display {}

/// Details about a product that does not fit in the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductOverflowError<T> {
    /// The larger operand.
    pub first: T,
    /// The smaller operand.
    pub second: T,
}

impl<T> ProductOverflowError<T> {
    #[inline]
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }
}

impl<T> std::fmt::Display for ProductOverflowError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Product {} * {} overflows the element type ({})",
            self.first,
            self.second,
            std::any::type_name::<T>()
        )
    }
}

impl<T> std::error::Error for ProductOverflowError<T> where T: std::fmt::Debug + Display {}

impl<T> Display for PairwiseError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientLength(e) => write!(f, "Invalid input: {}", e),
            Self::NegativeElement(e) => write!(f, "Invalid input: {}", e),
            Self::Overflow(e) => write!(f, "Overflow: {}", e),
        }
    }
}

impl<T> std::error::Error for PairwiseError<T> where T: std::fmt::Debug + Display {}

impl<T> From<InsufficientLengthError> for PairwiseError<T> {
    fn from(e: InsufficientLengthError) -> Self {
        Self::InsufficientLength(e)
    }
}

impl<T> From<NegativeElementError<T>> for PairwiseError<T> {
    fn from(e: NegativeElementError<T>) -> Self {
        Self::NegativeElement(e)
    }
}

impl<T> From<ProductOverflowError<T>> for PairwiseError<T> {
    fn from(e: ProductOverflowError<T>) -> Self {
        Self::Overflow(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_insufficient_length() {
        let err: PairwiseError<u64> = InsufficientLengthError::new(1).into();
        assert_eq!(
            err.to_string(),
            "Invalid input: A pair needs at least 2 elements, but the sequence has 1"
        );
    }

    #[test]
    fn test_display_negative_element() {
        let err: PairwiseError<i32> = NegativeElementError::new(3, -7).into();
        assert_eq!(err.to_string(), "Invalid input: Element -7 at index 3 is negative");
    }

    #[test]
    fn test_display_overflow() {
        let err: PairwiseError<u8> = ProductOverflowError::new(255, 2).into();
        assert_eq!(
            err.to_string(),
            "Overflow: Product 255 * 2 overflows the element type (u8)"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn as_std_error<E: std::error::Error>(_: &E) {}
        let err: PairwiseError<i64> = InsufficientLengthError::new(0).into();
        as_std_error(&err);
    }
}
