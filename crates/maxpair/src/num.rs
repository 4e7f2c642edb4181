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

//! # Pairwise Numeric Trait
//!
//! `PairwiseNumeric` collects the integer capabilities the selectors rely on
//! into a single alias: intrinsic traits (`PrimInt`) for ordering and copying,
//! the `Zero` constant for the non-negativity check, and by-value checked
//! multiplication so products never wrap silently.
//!
//! Both signed and unsigned primitives qualify. Unsigned types make the
//! non-negativity contract hold by construction; signed types are checked at
//! run time.

use maxpair_core::num::{constants::Zero, ops::checked_arithmetic::CheckedMulVal};
use num_traits::PrimInt;
use std::hash::Hash;

/// A trait alias for integer types that can be used as sequence elements.
///
/// Implemented for every primitive integer type, `u8` through `u128` and
/// `i8` through `i128`.
pub trait PairwiseNumeric:
    PrimInt + std::fmt::Debug + std::fmt::Display + Zero + CheckedMulVal + Send + Sync + Hash
{
}

impl<T> PairwiseNumeric for T where
    T: PrimInt
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + CheckedMulVal
        + Send
        + Sync
        + Hash
{
}
