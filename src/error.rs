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

//! Decimal error definitions.

use thiserror::Error;

/// The reason a decimal string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// An unexpected character has been met.
    #[error("unexpected character")]
    WrongChar,
    /// No digits before or after the decimal point.
    #[error("no digits")]
    NoDigits,
    /// The integral part does not fit in the mantissa.
    #[error("value overflows decimal format")]
    Overflow,
    /// A space character, while disallowed by the parse options.
    #[error("unexpected space character")]
    Space,
    /// Trailing junk after the number, while disallowed by the parse options.
    #[error("trailing characters after the number")]
    TrailingJunk,
    /// Inputs like `"42."` or `".42"`, while disallowed by the parse options.
    #[error("leading or trailing decimal point")]
    BoundaryDot,
    /// More fractional digits than the precision holds, while rounding is
    /// disallowed by the parse options.
    #[error("too many fractional digits")]
    Rounding,
}

/// An error which can be returned when parsing a decimal.
///
/// Carries the 0-based offset of the character where the error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    kind: ParseErrorKind,
    position: u32,
}

impl ParseError {
    #[inline]
    pub(crate) const fn new(kind: ParseErrorKind, position: u32) -> ParseError {
        ParseError { kind, position }
    }

    /// Returns the reason of the error.
    #[inline]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the 0-based character offset where the error was detected.
    #[inline]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Renders a two-line message quoting `source` with a caret under the
    /// offending column.
    pub fn annotate(&self, source: &str) -> String {
        const PREFIX: &str = "cannot parse decimal from \"";
        let caret_offset = PREFIX.len() + self.position as usize;
        format!(
            "{}{}\": {}\n{:>width$}",
            PREFIX,
            source,
            self.kind,
            '^',
            width = caret_offset + 1
        )
    }
}

/// An error which can be returned for a power of ten outside `[0, 18]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid power of 10: {0}")]
pub struct InvalidPowerError(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::new(ParseErrorKind::TrailingJunk, 3);
        assert_eq!(
            err.to_string(),
            "trailing characters after the number at position 3"
        );
        assert_eq!(err.kind(), ParseErrorKind::TrailingJunk);
        assert_eq!(err.position(), 3);

        assert_eq!(InvalidPowerError(19).to_string(), "invalid power of 10: 19");
    }

    #[test]
    fn test_annotate() {
        let err = ParseError::new(ParseErrorKind::WrongChar, 2);
        let msg = err.annotate("12x34");
        let mut lines = msg.lines();

        let first = lines.next().unwrap();
        assert_eq!(
            first,
            "cannot parse decimal from \"12x34\": unexpected character"
        );

        let second = lines.next().unwrap();
        assert_eq!(second.len(), first.find('x').unwrap() + 1);
        assert!(second.ends_with('^'));
        assert!(lines.next().is_none());
    }
}
