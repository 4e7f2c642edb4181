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

use core::ops::Mul;

/// A trait for types that support checked multiplication by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_mul`, but provides
/// a trait-based API that does not take references (unlike `num_traits::CheckedMul`).
///
/// # Examples
///
/// ```rust
/// # use maxpair_core::num::ops::checked_arithmetic::CheckedMulVal;
/// let a: u8 = 20;
/// let b: u8 = 10;
/// assert_eq!(a.checked_mul_val(b), Some(200)); // No overflow
/// let c: u8 = 20;
/// assert_eq!(a.checked_mul_val(c), None); // Overflow occurs (20*20 = 400 > 255)
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_mul_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_mul(self, v)
                }
            }
        )*
    };
}

checked_mul_impl_val!(u8, u16, u32, u64, usize, u128);
checked_mul_impl_val!(i8, i16, i32, i64, isize, i128);

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_mul_val<T: CheckedMulVal>(a: T, b: T) -> Option<T> {
        a.checked_mul_val(b)
    }

    #[test]
    fn test_checked_mul_val_unsigned() {
        assert_eq!(checked_mul_val(200_000_u64, 199_999_u64), Some(39_999_800_000));
        assert_eq!(checked_mul_val(u32::MAX, 2_u32), None);
        assert_eq!(checked_mul_val(0_u8, u8::MAX), Some(0));
    }

    #[test]
    fn test_checked_mul_val_signed() {
        assert_eq!(checked_mul_val(-3_i32, 7_i32), Some(-21));
        assert_eq!(checked_mul_val(i64::MAX, 2_i64), None);
        assert_eq!(checked_mul_val(i8::MIN, -1_i8), None);
    }

    #[test]
    fn test_checked_mul_val_wide() {
        let a = u64::MAX as u128;
        assert_eq!(checked_mul_val(a, a), Some(a * a));
        assert_eq!(checked_mul_val(u128::MAX, 2_u128), None);
    }
}
