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

//! Rounding policies and powers of ten.

use crate::error::InvalidPowerError;

/// The largest `k` such that `10^k` fits in a signed 64-bit mantissa.
pub const MAX_DECIMAL_DIGITS: u32 = 18;

const fn pow10_table() -> [i64; (MAX_DECIMAL_DIGITS + 1) as usize] {
    let mut table = [0_i64; (MAX_DECIMAL_DIGITS + 1) as usize];
    let mut pow = 1_i64;
    let mut i = 0;
    while i < MAX_DECIMAL_DIGITS as usize {
        table[i] = pow;
        assert!(pow <= i64::MAX / 10);
        pow *= 10;
        i += 1;
    }
    table[MAX_DECIMAL_DIGITS as usize] = pow;
    table
}

/// `POW10[k] == 10^k`.
pub(crate) const POW10: [i64; (MAX_DECIMAL_DIGITS + 1) as usize] = pow10_table();

// MAX_DECIMAL_DIGITS must be the largest exponent whose power still fits
const _: () = assert!(i64::MAX / 10 < POW10[MAX_DECIMAL_DIGITS as usize]);

/// A fast, const-friendly power of 10.
///
/// # Panics
/// Panics if `exp` is greater than [`MAX_DECIMAL_DIGITS`]. In const contexts
/// the panic is a compile error; see [`checked_pow10`] for the fallible form.
#[inline]
pub const fn pow10(exp: u32) -> i64 {
    assert!(exp <= MAX_DECIMAL_DIGITS, "pow10: invalid power of 10");
    POW10[exp as usize]
}

/// The checked form of [`pow10`].
#[inline]
pub fn checked_pow10(exp: u32) -> Result<i64, InvalidPowerError> {
    if exp > MAX_DECIMAL_DIGITS {
        return Err(InvalidPowerError(exp));
    }
    Ok(POW10[exp as usize])
}

// `f64::floor`/`f64::ceil` route through libm; integer casts are enough for
// the mantissa range and saturate instead of invoking UB outside it.
#[inline]
fn floor_to_i64(value: f64) -> i64 {
    let truncated = value as i64;
    if truncated as f64 <= value {
        truncated
    } else {
        truncated - 1
    }
}

#[inline]
fn ceil_to_i64(value: f64) -> i64 {
    let truncated = value as i64;
    if truncated as f64 >= value {
        truncated
    } else {
        truncated + 1
    }
}

/// Specifies how lossy operations select their integer result.
///
/// A policy is an empty marker type carried in the [`Decimal`] signature;
/// both of its forms must agree on which integer a given rational maps to.
///
/// [`Decimal`]: crate::Decimal
pub trait RoundPolicy {
    /// Reduces an intermediate wide-float value to an integer.
    fn round(value: f64) -> i64;

    /// Computes `a / b` rounded per the policy, using integer arithmetic
    /// only.
    ///
    /// Returns `None` when the policy's rounding correction would overflow
    /// before the division; callers pick a fallback per use site and must
    /// not substitute a differently-rounded result.
    fn div_rounded(a: i64, b: i64) -> Option<i64>;
}

/// The fastest rounding. Rounds towards zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRound;

/// Rounds towards zero.
pub type DownRound = NullRound;

impl RoundPolicy for NullRound {
    #[inline]
    fn round(value: f64) -> i64 {
        value as i64
    }

    #[inline]
    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        Some(a / b)
    }
}

/// Default rounding. Fast, rounds to nearest.
///
/// On 0.5, rounds away from zero. Also, sometimes rounds up numbers in the
/// neighborhood of 0.5, e.g. `0.49999999999999994 -> 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefRound;

impl RoundPolicy for DefRound {
    #[inline]
    fn round(value: f64) -> i64 {
        (value + if value < 0.0 { -0.5 } else { 0.5 }) as i64
    }

    #[inline]
    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let corr = (b / 2).abs();
        if a >= 0 {
            if i64::MAX - a >= corr {
                return Some((a + corr) / b);
            }
        } else if a - i64::MIN >= corr {
            return Some((a - corr) / b);
        }
        None
    }
}

/// Round to nearest, 0.5 towards zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfDownRound;

impl RoundPolicy for HalfDownRound {
    #[inline]
    fn round(value: f64) -> i64 {
        if value >= 0.0 {
            let decimals = value - floor_to_i64(value) as f64;
            if decimals > 0.5 {
                ceil_to_i64(value)
            } else {
                floor_to_i64(value)
            }
        } else {
            let decimals = ceil_to_i64(value) as f64 - value;
            if decimals < 0.5 {
                ceil_to_i64(value)
            } else {
                floor_to_i64(value)
            }
        }
    }

    #[inline]
    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let corr = b.abs() / 2;
        let remainder = a.abs() % b.abs();
        if a >= 0 {
            if i64::MAX - a >= corr {
                return if remainder > corr {
                    Some((a + corr) / b)
                } else {
                    Some(a / b)
                };
            }
        } else if a - i64::MIN >= corr {
            return Some((a - corr) / b);
        }
        None
    }
}

/// Round to nearest, 0.5 away from zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfUpRound;

impl RoundPolicy for HalfUpRound {
    #[inline]
    fn round(value: f64) -> i64 {
        if value >= 0.0 {
            let decimals = value - floor_to_i64(value) as f64;
            if decimals >= 0.5 {
                ceil_to_i64(value)
            } else {
                floor_to_i64(value)
            }
        } else {
            let decimals = ceil_to_i64(value) as f64 - value;
            if decimals <= 0.5 {
                ceil_to_i64(value)
            } else {
                floor_to_i64(value)
            }
        }
    }

    #[inline]
    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let corr = b.abs() / 2;
        let remainder = a.abs() % b.abs();
        if a >= 0 {
            if i64::MAX - a >= corr {
                return if remainder >= corr {
                    Some((a + corr) / b)
                } else {
                    Some(a / b)
                };
            }
        } else if a - i64::MIN >= corr {
            return if remainder < corr {
                Some((a - remainder) / b)
            } else if remainder == corr {
                Some((a + corr) / b)
            } else {
                Some((a + remainder - b.abs()) / b)
            };
        }
        None
    }
}

/// Round to nearest, 0.5 towards the number with an even last digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfEvenRound;

impl RoundPolicy for HalfEvenRound {
    #[inline]
    fn round(value: f64) -> i64 {
        if value >= 0.0 {
            let decimals = value - floor_to_i64(value) as f64;
            if decimals > 0.5 {
                ceil_to_i64(value)
            } else if decimals < 0.5 {
                floor_to_i64(value)
            } else if floor_to_i64(value) % 2 == 0 {
                floor_to_i64(value)
            } else {
                ceil_to_i64(value)
            }
        } else {
            let decimals = ceil_to_i64(value) as f64 - value;
            if decimals > 0.5 {
                floor_to_i64(value)
            } else if decimals < 0.5 {
                ceil_to_i64(value)
            } else if ceil_to_i64(value) % 2 == 0 {
                ceil_to_i64(value)
            } else {
                floor_to_i64(value)
            }
        }
    }

    #[inline]
    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let half = b.abs() / 2;
        let remainder = a.abs() % b.abs();

        let output = if remainder == 0 {
            a / b
        } else if a >= 0 {
            if remainder > half {
                (a - remainder + b.abs()) / b
            } else if remainder < half {
                (a - remainder) / b
            } else if (a / b).abs() % 2 == 0 {
                a / b
            } else {
                (a - remainder + b.abs()) / b
            }
        } else if remainder > half {
            (a + remainder - b.abs()) / b
        } else if remainder < half {
            (a + remainder) / b
        } else if (a / b).abs() % 2 == 0 {
            a / b
        } else {
            (a + remainder - b.abs()) / b
        };

        Some(output)
    }
}

/// Round towards +infinity.
#[derive(Debug, Clone, Copy, Default)]
pub struct CeilingRound;

impl RoundPolicy for CeilingRound {
    #[inline]
    fn round(value: f64) -> i64 {
        ceil_to_i64(value)
    }

    #[inline]
    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let remainder = a.abs() % b.abs();
        if remainder == 0 {
            Some(a / b)
        } else if a >= 0 {
            Some((a + b.abs()) / b)
        } else {
            Some(a / b)
        }
    }
}

/// Round towards -infinity.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorRound;

impl RoundPolicy for FloorRound {
    #[inline]
    fn round(value: f64) -> i64 {
        floor_to_i64(value)
    }

    #[inline]
    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let remainder = a.abs() % b.abs();
        if remainder == 0 {
            Some(a / b)
        } else if a >= 0 {
            Some((a - remainder) / b)
        } else {
            Some((a + remainder - b.abs()) / b)
        }
    }
}

/// Round away from zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpRound;

impl RoundPolicy for UpRound {
    #[inline]
    fn round(value: f64) -> i64 {
        if value >= 0.0 {
            ceil_to_i64(value)
        } else {
            floor_to_i64(value)
        }
    }

    #[inline]
    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let remainder = a.abs() % b.abs();
        if remainder == 0 {
            Some(a / b)
        } else if a >= 0 {
            Some((a + b.abs()) / b)
        } else {
            Some((a - b.abs()) / b)
        }
    }
}
