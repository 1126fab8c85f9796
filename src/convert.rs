// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversion between `Decimal` and primitive number types.

use crate::decimal::Decimal;
use crate::round::RoundPolicy;

macro_rules! impl_from_int {
    ($int: ty) => {
        impl<const P: u32, R: RoundPolicy> From<$int> for Decimal<P, R> {
            #[inline]
            fn from(value: $int) -> Self {
                Decimal::from_unbiased(value as i64 * Decimal::<P, R>::FACTOR)
            }
        }
    };
    ($($int: ty), * $(,)?) => {
        $(impl_from_int!($int);)*
    };
}

impl_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<const P: u32, R: RoundPolicy> From<Decimal<P, R>> for f64 {
    /// Equivalent to [`Decimal::to_f64_inexact`].
    #[inline]
    fn from(value: Decimal<P, R>) -> f64 {
        value.to_f64_inexact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_int() {
        assert_eq!(Decimal::<4>::from(0_i64).as_unbiased(), 0);
        assert_eq!(Decimal::<4>::from(42_i64).as_unbiased(), 420_000);
        assert_eq!(Decimal::<4>::from(-42_i64).as_unbiased(), -420_000);
        assert_eq!(Decimal::<4>::from(42_u8).as_unbiased(), 420_000);
        assert_eq!(Decimal::<4>::from(-1_i8).as_unbiased(), -10_000);
        assert_eq!(Decimal::<0>::from(i64::MAX).as_unbiased(), i64::MAX);
        assert_eq!(Decimal::<2>::from(7_usize).to_string(), "7");
    }

    #[test]
    fn test_into_f64() {
        let dec: Decimal<2> = "12.25".parse().unwrap();
        assert_eq!(f64::from(dec), 12.25);

        let dec: Decimal<4> = "-0.5".parse().unwrap();
        assert_eq!(f64::from(dec), -0.5);
    }
}
