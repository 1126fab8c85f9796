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

//! Fixed-point decimals on a 64-bit mantissa, for deterministic arithmetic
//! on money-like values where binary floating point is unacceptable.
//!
//! The number of fractional digits (up to 18) and the rounding policy are
//! part of the type, so mixed-precision arithmetic is unambiguous and
//! checked at compile time.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, [`Decimal`] implements the
//! `serde::Serialize` and `serde::Deserialize` traits, writing and reading
//! the string form.
//!
//! ## Usage
//!
//! To build a decimal, parse a string:
//!
//! ```
//! use decimal64::Decimal;
//!
//! let n1: Decimal<2> = "1.23".parse().unwrap();
//! let n2: Decimal<2> = "4.56".parse().unwrap();
//! let result = n1 + n2;
//! assert_eq!(result.to_string(), "5.79");
//! ```
//!
//! To build a decimal from Rust primitive types:
//!
//! ```
//! use decimal64::Decimal;
//!
//! let n1 = Decimal::<4>::from(123_i64);
//! let n2 = Decimal::<4>::from(456_i64);
//! assert_eq!(n1 + n2, Decimal::<4>::from(579_i64));
//! ```
//!
//! Lossy operations round per the policy in the type:
//!
//! ```
//! use decimal64::{Decimal, FloorRound};
//!
//! let price: Decimal<2> = "7.99".parse().unwrap();
//! assert_eq!((price / 2).to_string(), "4");
//!
//! let floored = Decimal::<2, FloorRound>::decimal_cast(price);
//! assert_eq!((floored / 2).to_string(), "3.99");
//! ```
//!
//! Values over the precision limit are accepted in permissive parsing only:
//!
//! ```
//! use decimal64::Decimal;
//!
//! assert!("0.12345".parse::<Decimal<4>>().is_err());
//! let rounded = Decimal::<4>::from_str_permissive("0.12345").unwrap();
//! assert_eq!(rounded.to_string(), "0.1235");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod convert;
mod decimal;
mod error;
mod mult_div;
mod ops;
mod parse;
mod round;

#[cfg(feature = "serde")]
mod serde;

pub use crate::decimal::Decimal;
pub use crate::error::{InvalidPowerError, ParseError, ParseErrorKind};
pub use crate::parse::{parse_from_source, CharSource, IoSource, ParseOptions, StrSource};
pub use crate::round::{
    checked_pow10, pow10, CeilingRound, DefRound, DownRound, FloorRound, HalfDownRound,
    HalfEvenRound, HalfUpRound, NullRound, RoundPolicy, UpRound, MAX_DECIMAL_DIGITS,
};
