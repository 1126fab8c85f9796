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

//! Decimal parsing utilities.

use crate::decimal::Decimal;
use crate::error::{ParseError, ParseErrorKind};
use crate::round::{pow10, RoundPolicy, MAX_DECIMAL_DIGITS};
use std::io::{BufRead, ErrorKind};
use std::str::FromStr;

/// A pull-based character source with one character of pushback.
///
/// Both concrete sources share a single parser state machine, which
/// guarantees an identical error taxonomy for in-memory and streamed input.
pub trait CharSource {
    /// Returns the next byte, or `0` at the end of input.
    fn get(&mut self) -> u8;

    /// Pushes the byte last returned by [`CharSource::get`] back into the
    /// source.
    fn unget(&mut self);
}

/// Reads characters from an in-memory string.
#[derive(Debug)]
pub struct StrSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> StrSource<'a> {
    #[inline]
    pub fn new(input: &'a str) -> StrSource<'a> {
        StrSource {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn get(&mut self) -> u8 {
        match self.bytes.get(self.pos) {
            Some(&c) => {
                self.pos += 1;
                c
            }
            None => 0,
        }
    }

    #[inline]
    fn unget(&mut self) {
        self.pos -= 1;
    }
}

/// Reads characters from a buffered byte stream.
///
/// Bytes are consumed lazily, so whatever follows the parsed number stays in
/// the underlying reader. A read error behaves as end of input.
#[derive(Debug)]
pub struct IoSource<R: BufRead> {
    input: R,
    // the byte returned by the last `get` is consumed only by the next one
    pending: bool,
}

impl<R: BufRead> IoSource<R> {
    #[inline]
    pub fn new(input: R) -> IoSource<R> {
        IoSource {
            input,
            pending: false,
        }
    }
}

impl<R: BufRead> CharSource for IoSource<R> {
    fn get(&mut self) -> u8 {
        if self.pending {
            self.input.consume(1);
            self.pending = false;
        }
        loop {
            match self.input.fill_buf() {
                Ok([]) => return 0,
                Ok(buf) => {
                    self.pending = true;
                    return buf[0];
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => return 0,
            }
        }
    }

    #[inline]
    fn unget(&mut self) {
        self.pending = false;
    }
}

/// Options for parsing a decimal string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Allow space characters in the beginning or in the end: `" 42  "`.
    pub allow_spaces: bool,
    /// Allow any trailing characters: `"42ABC"`.
    pub allow_trailing_junk: bool,
    /// Allow a leading or trailing dot: `"42."`, `".42"`.
    pub allow_boundary_dot: bool,
    /// Allow fractional digits beyond the precision, rounding per the
    /// policy: `"0.123456"` becomes `0.1234` or `0.1235`.
    pub allow_rounding: bool,
}

impl ParseOptions {
    /// The exact `[+-]?\d+(\.\d+)?` grammar.
    pub const STRICT: ParseOptions = ParseOptions {
        allow_spaces: false,
        allow_trailing_junk: false,
        allow_boundary_dot: false,
        allow_rounding: false,
    };

    /// Tolerates surrounding spaces, boundary dots and excess fractional
    /// digits.
    pub const PERMISSIVE: ParseOptions = ParseOptions {
        allow_spaces: true,
        allow_trailing_junk: false,
        allow_boundary_dot: true,
        allow_rounding: true,
    };
}

#[inline]
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n' | 0x0b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Before reading any part of the decimal.
    Sign,
    /// After reading a sign.
    BeforeFirstDigit,
    /// Only leading zeros (at least one) have been met.
    LeadingZeros,
    /// At least one digit before the dot has been met.
    BeforeDot,
    /// Reading fractional digits.
    AfterDot,
    /// Reading and rounding extra fractional digits.
    IgnoringAfterDot,
    /// A character unrelated to the decimal has been met.
    End,
}

/// The raw output of the state machine, before packing into a `Decimal`.
#[derive(Debug)]
pub(crate) struct ParsedUnpacked {
    pub before: i64,
    pub after: i64,
    pub decimal_digits: u8,
    pub negative: bool,
    pub error: Option<ParseErrorKind>,
    pub position: u32,
}

/// Extracts values from a char source ready to be packed into a `Decimal`.
///
/// Once an error is recorded the machine keeps consuming digits, so the
/// reported position is always that of the first offending character.
pub(crate) fn parse_unpacked<S: CharSource>(mut input: S, options: ParseOptions) -> ParsedUnpacked {
    const DOT: u8 = b'.';

    let mut before: i64 = 0;
    let mut after: i64 = 0;
    let mut negative = false;

    let mut position: i64 = -1;
    let mut state = ParseState::Sign;
    let mut error: Option<ParseErrorKind> = None;
    let mut before_digits: u32 = 0;
    let mut after_digits: u8 = 0;

    while state != ParseState::End {
        let c = input.get();
        if c == 0 {
            break;
        }
        if error.is_none() {
            position += 1;
        }

        match state {
            ParseState::Sign => {
                if c == b'-' {
                    negative = true;
                    state = ParseState::BeforeFirstDigit;
                } else if c == b'+' {
                    state = ParseState::BeforeFirstDigit;
                } else if c == b'0' {
                    state = ParseState::LeadingZeros;
                    before_digits = 1;
                } else if (b'1'..=b'9').contains(&c) {
                    state = ParseState::BeforeDot;
                    before = (c - b'0') as i64;
                    before_digits = 1;
                } else if c == DOT {
                    if !options.allow_boundary_dot && error.is_none() {
                        error = Some(ParseErrorKind::BoundaryDot); // keep reading digits
                    }
                    state = ParseState::AfterDot;
                } else if is_space(c) {
                    if !options.allow_spaces {
                        state = ParseState::End;
                        error = Some(ParseErrorKind::Space);
                    }
                } else {
                    state = ParseState::End;
                    error = Some(ParseErrorKind::WrongChar);
                }
            }
            ParseState::BeforeFirstDigit => {
                if c == b'0' {
                    state = ParseState::LeadingZeros;
                    before_digits = 1;
                } else if (b'1'..=b'9').contains(&c) {
                    state = ParseState::BeforeDot;
                    before = (c - b'0') as i64;
                    before_digits = 1;
                } else if c == DOT {
                    if !options.allow_boundary_dot && error.is_none() {
                        error = Some(ParseErrorKind::BoundaryDot); // keep reading digits
                    }
                    state = ParseState::AfterDot;
                } else {
                    state = ParseState::End;
                    error = Some(ParseErrorKind::WrongChar);
                }
            }
            ParseState::LeadingZeros => {
                if c == b'0' {
                    // skip
                } else if (b'1'..=b'9').contains(&c) {
                    state = ParseState::BeforeDot;
                    before = (c - b'0') as i64;
                } else if c == DOT {
                    state = ParseState::AfterDot;
                } else {
                    state = ParseState::End;
                }
            }
            ParseState::BeforeDot => {
                if c.is_ascii_digit() {
                    if before_digits < MAX_DECIMAL_DIGITS {
                        before = 10 * before + (c - b'0') as i64;
                        before_digits += 1;
                    } else if error.is_none() {
                        error = Some(ParseErrorKind::Overflow); // keep reading digits
                    }
                } else if c == DOT {
                    state = ParseState::AfterDot;
                } else {
                    state = ParseState::End;
                }
            }
            ParseState::AfterDot => {
                if c.is_ascii_digit() {
                    if (after_digits as u32) < MAX_DECIMAL_DIGITS {
                        after = 10 * after + (c - b'0') as i64;
                        after_digits += 1;
                    } else {
                        if !options.allow_rounding && error.is_none() {
                            error = Some(ParseErrorKind::Rounding); // keep reading digits
                        }
                        state = ParseState::IgnoringAfterDot;
                        if c >= b'5' {
                            // round half up
                            after += 1;
                        }
                    }
                } else {
                    if !options.allow_boundary_dot && after_digits == 0 && error.is_none() {
                        error = Some(ParseErrorKind::BoundaryDot);
                    }
                    state = ParseState::End;
                }
            }
            ParseState::IgnoringAfterDot => {
                if !c.is_ascii_digit() {
                    state = ParseState::End;
                }
            }
            ParseState::End => unreachable!(),
        }
    }

    if state == ParseState::End {
        input.unget();

        if error.is_none() && !options.allow_trailing_junk {
            if !options.allow_spaces {
                error = Some(ParseErrorKind::Space);
            }
            position -= 1;

            loop {
                let c = input.get();
                if c == 0 {
                    break;
                }
                position += 1;
                if !is_space(c) {
                    error = Some(ParseErrorKind::TrailingJunk);
                    input.unget();
                    break;
                }
            }
        }
    }

    if error.is_none() && before_digits == 0 && after_digits == 0 {
        error = Some(ParseErrorKind::NoDigits);
    }

    if error.is_none()
        && state == ParseState::AfterDot
        && !options.allow_boundary_dot
        && after_digits == 0
    {
        error = Some(ParseErrorKind::BoundaryDot);
    }

    ParsedUnpacked {
        before,
        after,
        decimal_digits: after_digits,
        negative,
        error,
        position: position.max(0) as u32,
    }
}

// from_unpacked::<4, R>(12, 34, 3) == 12.034
fn from_unpacked<const P: u32, R: RoundPolicy>(before: i64, after: i64, digits: u32) -> Decimal<P, R> {
    debug_assert!((before >= 0 && after >= 0) || (before <= 0 && after <= 0));

    if digits <= P {
        let after = after * pow10(P - digits);
        Decimal::from_unbiased(before * Decimal::<P, R>::FACTOR + after)
    } else {
        let rounded_after = R::div_rounded(after, pow10(digits - P)).unwrap_or(0);
        Decimal::from_unbiased(before * Decimal::<P, R>::FACTOR + rounded_after)
    }
}

/// Parses a decimal from an arbitrary character source.
pub fn parse_from_source<const P: u32, R: RoundPolicy, S: CharSource>(
    input: S,
    options: ParseOptions,
) -> Result<Decimal<P, R>, ParseError> {
    let mut parsed = parse_unpacked(input, options);

    if let Some(kind) = parsed.error {
        return Err(ParseError::new(kind, parsed.position));
    }

    // the integral part alone must leave room for the fractional digits, so
    // the effective integral cap is 18 - P digits
    if parsed.before >= i64::MAX / Decimal::<P, R>::FACTOR {
        return Err(ParseError::new(ParseErrorKind::Overflow, 0));
    }

    if !options.allow_rounding && parsed.decimal_digits as u32 > P {
        return Err(ParseError::new(ParseErrorKind::Rounding, 0));
    }

    if parsed.negative {
        parsed.before = -parsed.before;
        parsed.after = -parsed.after;
    }

    Ok(from_unpacked(
        parsed.before,
        parsed.after,
        parsed.decimal_digits as u32,
    ))
}

impl<const P: u32, R: RoundPolicy> FromStr for Decimal<P, R> {
    type Err = ParseError;

    /// Parses a decimal matching `[+-]?\d+(\.\d+)?` exactly.
    ///
    /// No extra characters, including spaces, are allowed. Extra leading and
    /// trailing zeros (within `P`) are discarded. Input containing more
    /// fractional digits than `P` is rejected, with no implicit rounding.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_source(StrSource::new(s), ParseOptions::STRICT)
    }
}

impl<const P: u32, R: RoundPolicy> Decimal<P, R> {
    /// Parses from a string, allowing rounding, spaces and boundary dots.
    ///
    /// In addition to the strict [`FromStr`] grammar, accepts:
    /// - rounding per `R`, e.g. `"12.3456789"` with `P == 2`
    /// - space characters, e.g. `" \t42  \n"`
    /// - a leading or trailing dot, e.g. `"5."` and `".5"`
    #[inline]
    pub fn from_str_permissive(s: &str) -> Result<Decimal<P, R>, ParseError> {
        parse_from_source(StrSource::new(s), ParseOptions::PERMISSIVE)
    }

    /// Reads a decimal from a buffered byte stream.
    ///
    /// Acts like the [`FromStr`] impl, except that leading spaces are
    /// skipped and junk that immediately follows the number is allowed and
    /// stays unconsumed in the reader.
    ///
    /// ```
    /// use decimal64::Decimal;
    /// use std::io::{BufReader, Read};
    ///
    /// let mut input = BufReader::new(&b"42.5 change"[..]);
    /// let dec = Decimal::<2>::read_from(&mut input).unwrap();
    /// assert_eq!(dec.to_string(), "42.5");
    ///
    /// let mut rest = String::new();
    /// input.read_to_string(&mut rest).unwrap();
    /// assert_eq!(rest, " change");
    /// ```
    #[inline]
    pub fn read_from<T: BufRead>(input: T) -> Result<Decimal<P, R>, ParseError> {
        parse_from_source(
            IoSource::new(input),
            ParseOptions {
                allow_spaces: true,
                allow_trailing_junk: true,
                ..ParseOptions::STRICT
            },
        )
    }
}
