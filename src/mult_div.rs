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

//! `(a * b) / d` in 64-bit arithmetic with a single rounding at the end.

use crate::round::RoundPolicy;

#[inline]
fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i64
}

/// Computes `round((value1 * value2) / divisor)` per the rounding policy.
///
/// The product is decomposed so that only the remainders ever need a wide
/// multiply; when even their reduced product does not fit, the remainder term
/// degrades to `f64` arithmetic. Division by zero is the caller's
/// responsibility, as with the plain `/` operator.
pub(crate) fn mult_div<R: RoundPolicy>(value1: i64, value2: i64, divisor: i64) -> i64 {
    let value1_int = value1 / divisor;
    let mut value1_dec = value1 % divisor;
    let value2_int = value2 / divisor;
    let mut value2_dec = value2 % divisor;

    // value1 * value2 / divisor == value1 * value2_int
    //                            + value1_int * value2_dec
    //                            + value1_dec * value2_dec / divisor
    let result = value1 * value2_int + value1_int * value2_dec;

    if value1_dec == 0 || value2_dec == 0 {
        return result;
    }

    if let Some(dec_part) = value1_dec.checked_mul(value2_dec) {
        return result + R::div_rounded(dec_part, divisor).unwrap_or(0);
    }

    // reduce the remainders against the divisor and retry
    let mut divisor = divisor;
    let c = gcd(value1_dec, divisor);
    if c != 1 {
        value1_dec /= c;
        divisor /= c;
    }
    let c = gcd(value2_dec, divisor);
    if c != 1 {
        value2_dec /= c;
        divisor /= c;
    }

    if let Some(dec_part) = value1_dec.checked_mul(value2_dec) {
        if let Some(rounded) = R::div_rounded(dec_part, divisor) {
            return result + rounded;
        }
    }

    // still too wide, use the less precise form
    result + R::round(value1_dec as f64 * value2_dec as f64 / divisor as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{DefRound, FloorRound, HalfEvenRound, NullRound};

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(12, -18), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn test_exact() {
        // remainder-free products take the accumulator path only
        assert_eq!(mult_div::<DefRound>(300, 200, 100), 600);
        assert_eq!(mult_div::<DefRound>(-300, 200, 100), -600);
        assert_eq!(mult_div::<NullRound>(12_300, 45_600, 100), 5_608_800);
    }

    #[test]
    fn test_small_remainders() {
        // 12345 * 6789 / 100 = 838102.05
        assert_eq!(mult_div::<DefRound>(12_345, 6_789, 100), 838_102);
        assert_eq!(mult_div::<NullRound>(12_345, 6_789, 100), 838_102);
        // 1.05 rounded per policy
        assert_eq!(mult_div::<DefRound>(15, 7, 100), 1);
        assert_eq!(mult_div::<FloorRound>(-15, 7, 100), -2);
        assert_eq!(mult_div::<NullRound>(-15, 7, 100), -1);
    }

    #[test]
    fn test_gcd_reduction() {
        // 3e18 * 3e18 / 9e18 overflows the remainder product until both
        // remainders are reduced against the divisor
        let v = 3_000_000_000_000_000_000_i64;
        let d = 9_000_000_000_000_000_000_i64;
        assert_eq!(mult_div::<DefRound>(v, v, d), 1_000_000_000_000_000_000);
        assert_eq!(mult_div::<HalfEvenRound>(-v, v, d), -1_000_000_000_000_000_000);

        // 5e17 * 5e17 / 1e18 = 2.5e17
        let v = 500_000_000_000_000_000_i64;
        let d = 1_000_000_000_000_000_000_i64;
        assert_eq!(mult_div::<DefRound>(v, v, d), 250_000_000_000_000_000);
    }

    #[test]
    fn test_float_fallback() {
        // (2^32 + 1)^2 / 2^62: the remainders stay coprime to the divisor,
        // and the product is exact in f64 after rounding
        let v = (1_i64 << 32) + 1;
        let d = 1_i64 << 62;
        assert_eq!(mult_div::<DefRound>(v, v, d), 4);
        assert_eq!(mult_div::<NullRound>(v, v, d), 4);
    }

    #[test]
    fn test_mixed_signs() {
        assert_eq!(mult_div::<DefRound>(-12_345, 6_789, 100), -838_102);
        assert_eq!(mult_div::<DefRound>(12_345, -6_789, 100), -838_102);
        assert_eq!(mult_div::<DefRound>(-12_345, -6_789, 100), 838_102);
    }
}
